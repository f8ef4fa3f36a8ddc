//! crates/logging/src/empty.rs
//! No-op logger used as a safe default when nothing is wired in.

use std::fmt;

use super::level::Level;
use super::logger::Logger;

/// Logger that accepts every call and produces no output.
///
/// Every operation succeeds trivially. Unlike the real backends,
/// [`fatal`](Logger::fatal) does **not** terminate the process: the whole
/// point of this type is to be a placeholder that can never take an
/// application down. Code holding a `Box<dyn Logger>` can default to an
/// `EmptyLogger` and log unconditionally.
///
/// # Examples
///
/// ```
/// use logging::{fatal_log, EmptyLogger, Logger};
///
/// let log: Box<dyn Logger> = Box::new(EmptyLogger);
/// fatal_log!(log, "ignored");
/// // Still here: EmptyLogger's fatal returns normally.
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct EmptyLogger;

impl Logger for EmptyLogger {
    fn set_level(&self, _level: Level) {}

    fn log(&self, _severity: Level, _message: fmt::Arguments<'_>) {}

    fn fatal(&self, _message: fmt::Arguments<'_>) {}

    fn sub_logger(&self, _namespace: &str) -> Box<dyn Logger> {
        Box::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_returns_normally() {
        let log = EmptyLogger;
        log.fatal(format_args!("boom"));
        // Reaching this point is the test: no process termination.
    }

    #[test]
    fn all_severities_are_no_ops() {
        let log = EmptyLogger;
        log.log(Level::Error, format_args!("e"));
        log.error(format_args!("e"));
        log.warn(format_args!("w"));
        log.info(format_args!("i"));
        log.debug(format_args!("d"));
        log.trace(format_args!("t"));
        log.set_level(Level::Disabled);
        log.info(format_args!("still fine"));
    }

    #[test]
    fn sub_logger_is_also_empty() {
        let log = EmptyLogger;
        let child = log.sub_logger("child");
        child.fatal(format_args!("ignored"));
    }
}
