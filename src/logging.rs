//! Log level selection
//!
//! `RUST_LOG` sets both the `log` facade's max level and which navigation
//! events reach the footer. A directive aimed at this crate beats a bare
//! level, and directives for other crates are ignored.

use log::{Level, LevelFilter};
use std::env;
use std::sync::OnceLock;
use strum::EnumString;

/// Target name this binary logs under.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Used when `RUST_LOG` is unset or names no level we understand.
const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[strum(to_string = "warn", serialize = "warning")]
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        Level::from(level).to_level_filter()
    }
}

pub fn get_rust_log_level() -> LogLevel {
    env::var("RUST_LOG")
        .map(|rust_log| parse_rust_log_level(&rust_log))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Pick this crate's level out of a `RUST_LOG` value.
///
/// `home_dashboard=debug` (or `home_dashboard::ui=debug`) wins. Failing that,
/// the first bare level such as `warn` applies.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let mut global: Option<LogLevel> = None;
    for directive in rust_log.split(',').map(str::trim) {
        match directive.split_once('=') {
            Some((target, level)) => {
                if is_own_target(target.trim()) {
                    if let Ok(level) = level.trim().parse::<LogLevel>() {
                        return level;
                    }
                }
            }
            None => {
                if global.is_none() {
                    global = directive.parse().ok();
                }
            }
        }
    }
    global.unwrap_or(DEFAULT_LEVEL)
}

fn is_own_target(target: &str) -> bool {
    let target = target.replace('-', "_");
    target == CRATE_TARGET
        || target
            .strip_prefix(CRATE_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// Threshold for this process. `RUST_LOG` is read once.
pub fn threshold() -> LogLevel {
    static THRESHOLD: OnceLock<LogLevel> = OnceLock::new();
    *THRESHOLD.get_or_init(get_rust_log_level)
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, threshold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_levels() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("WARNING"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("Error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    // Our directive wins wherever it appears; other crates never set the level.
    fn test_own_directive_beats_global_and_other_crates() {
        assert_eq!(
            parse_rust_log_level("warn,ratatui=trace,home_dashboard=debug"),
            LogLevel::Debug
        );
        assert_eq!(parse_rust_log_level("ratatui=trace"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("tokio=trace, error"), LogLevel::Error);
    }

    #[test]
    fn test_module_and_hyphenated_targets() {
        assert_eq!(
            parse_rust_log_level("home_dashboard::navigation=trace"),
            LogLevel::Trace
        );
        assert_eq!(parse_rust_log_level("home-dashboard=error"), LogLevel::Error);
        // A crate that merely shares the prefix is someone else.
        assert_eq!(parse_rust_log_level("home_dashboard_extra=trace"), LogLevel::Info);
    }

    #[test]
    fn test_unparseable_own_directive_falls_back_to_global() {
        assert_eq!(
            parse_rust_log_level("home_dashboard=loud,warn"),
            LogLevel::Warn
        );
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
    }

    #[test]
    fn test_level_display_and_conversions() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(Level::from(LogLevel::Warn), Level::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }
}
