//! Tracing bootstrap for applications embedding the widgets.
//!
//! The crates only emit `tracing` events: `warn` for configuration errors,
//! `debug` per rendered widget and `trace` for stylesheet serialization. Hosts
//! that do not install their own subscriber can call [`install_tracing`].

use std::str::FromStr;
use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::log::level_filters::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Parses a level name, falling back to `info`.
#[must_use]
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Install a formatting subscriber (idempotent).
///
/// `RUST_LOG` takes precedence over `level`. Returns `true` only for the call
/// that actually installed the subscriber; later calls, and calls made after
/// the host installed its own global subscriber, return `false`.
pub fn install_tracing(level: &str) -> bool {
    let mut installed = false;
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(parse_level(level).into())
            .from_env_lossy();
        let console = fmt::layer().with_target(true).with_filter(filter);

        installed = tracing_subscriber::registry().with(console).try_init().is_ok();
        if !installed {
            eprintln!("ajaxful-rating tracing subscriber failed to initialize");
        }
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN "), LevelFilter::WARN);
        assert_eq!(parse_level("loud"), LevelFilter::INFO);
    }

    #[test]
    fn test_install_is_idempotent() {
        let _ = install_tracing("off");
        assert!(!install_tracing("off"));
    }
}
