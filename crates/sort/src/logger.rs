//! Stderr logger.
//!
//! Implements the `log::Log` trait so diagnostics never mix with the sorted
//! line on stdout. Level comes from `-v`/`-q`, then `RV_SORT_LOG`, then
//! defaults to `warn`.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_ENV: &str = "RV_SORT_LOG";

/// Global logger instance
static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Pick the effective level: flags win over the environment.
pub fn resolve_level(flag: Option<LevelFilter>, env: Option<&str>) -> LevelFilter {
    flag.or_else(|| env.and_then(|v| v.trim().parse().ok()))
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger.
pub fn init(flag: Option<LevelFilter>) -> Result<(), SetLoggerError> {
    let env = std::env::var(LOG_ENV).ok();
    log::set_logger(&LOGGER)?;
    log::set_max_level(resolve_level(flag, env.as_deref()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Off), Some("trace")),
            LevelFilter::Off
        );
    }

    #[test]
    fn test_env_fallback() {
        assert_eq!(resolve_level(None, Some("debug")), LevelFilter::Debug);
        assert_eq!(resolve_level(None, Some(" INFO ")), LevelFilter::Info);
    }

    #[test]
    fn test_default_warn() {
        assert_eq!(resolve_level(None, None), LevelFilter::Warn);
        assert_eq!(resolve_level(None, Some("loud")), LevelFilter::Warn);
    }
}
