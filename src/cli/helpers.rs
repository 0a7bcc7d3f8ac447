//! Shared helper functions for CLI commands

use clap::ValueEnum;

use crate::cli::OutputFormat;
use crate::core::Config;

/// Resolve `auto` to the configured default format (json if unset or unknown)
pub fn resolve_format(requested: OutputFormat, config: &Config) -> OutputFormat {
    if requested != OutputFormat::Auto {
        return requested;
    }

    config
        .default_format
        .as_deref()
        .and_then(|name| match OutputFormat::from_str(name, true) {
            Ok(OutputFormat::Auto) => None,
            Ok(format) => Some(format),
            Err(_) => {
                tracing::warn!(format = name, "ignoring unknown default_format");
                None
            }
        })
        .unwrap_or(OutputFormat::Json)
}
