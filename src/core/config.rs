//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// storyreq configuration with layered hierarchy
///
/// Only output handling is configurable; the requirement catalog is fixed.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default output format when `--format auto` is in effect
    pub default_format: Option<String>,

    /// Default file to write analysis output to
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/storyreq/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::from_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Environment variables
        if let Ok(format) = std::env::var("STORYREQ_FORMAT") {
            config.default_format = Some(format);
        }
        if let Ok(output) = std::env::var("STORYREQ_OUTPUT") {
            config.output = Some(PathBuf::from(output));
        }

        config
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "storyreq")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Read a config file, ignoring files that are absent or malformed
    fn from_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
    }
}
