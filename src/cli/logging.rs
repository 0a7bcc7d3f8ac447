//! Diagnostic logging setup

use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the stderr subscriber for the given `-v` count
///
/// When `RUST_LOG` is set its directives replace the verbosity level
/// entirely; otherwise `-v` picks the level (warn, info, debug, trace).
pub fn init(verbosity: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(verbosity, rust_log.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    // A subscriber may already be installed when embedded in another tool
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn build_filter(verbosity: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = verbosity_level(verbosity);
    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|err| {
            eprintln!("ignoring invalid RUST_LOG: {}", err);
            EnvFilter::new(level.to_string())
        }),
        None => EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_sets_level() {
        assert_eq!(build_filter(0, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(build_filter(2, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(build_filter(9, None).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_rust_log_can_lower_the_level() {
        let filter = build_filter(0, Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_rust_log_replaces_verbosity() {
        let filter = build_filter(3, Some("info"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_invalid_rust_log_falls_back_to_verbosity() {
        let filter = build_filter(1, Some("storyreq=notalevel"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_blank_rust_log_uses_verbosity() {
        let filter = build_filter(2, Some("  "));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
