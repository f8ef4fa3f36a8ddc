//! crates/logging/src/logger.rs
//! The polymorphic logger contract shared by every backend.

use std::fmt;

use super::level::Level;

/// Source location of a logging call.
///
/// The [`fatal_log!`](crate::fatal_log) family of macros captures the call
/// site with `file!()`/`line!()` and hands it to
/// [`Logger::log_at`]; backends that render a file-name prefix use it,
/// everything else discards it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    /// Source file containing the call, as produced by `file!()`.
    pub file: &'static str,
    /// Line of the call, as produced by `line!()`.
    pub line: u32,
}

impl CallSite {
    /// Returns the final path component of [`file`](Self::file).
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::CallSite;
    ///
    /// let site = CallSite { file: "src/bin/lantern.rs", line: 42 };
    /// assert_eq!(site.short_file(), "lantern.rs");
    /// ```
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

/// Capability surface common to every logging backend.
///
/// A logger is bound to a namespace at construction and carries an optional
/// instance-level override. Each emission call resolves its effective
/// threshold as "override if set, else the shared control's level" and
/// returns immediately when the message is filtered out. Messages arrive as
/// [`fmt::Arguments`], so rendering is lazy: no formatting work happens for
/// suppressed calls. The [`fatal_log!`](crate::fatal_log) family of macros
/// wraps `format_args!` for callers and tags each call with its
/// [`CallSite`].
///
/// # Fatal semantics
///
/// [`fatal`](Self::fatal) on a real backend terminates the process with a
/// non-zero status after emitting the message; it never returns control to
/// the caller. Termination happens even when a [`Level::Disabled`] threshold
/// suppresses the textual output. The one exception is
/// [`EmptyLogger`](crate::EmptyLogger), whose `fatal` is a no-op that returns
/// normally, since its purpose is to be a safe placeholder.
pub trait Logger: Send + Sync {
    /// Sets an instance-local level override.
    ///
    /// Passing [`Level::None`] reverts the instance to deferring to the
    /// shared control.
    fn set_level(&self, level: Level);

    /// Emits a message at `severity`, subject to the visibility rule.
    ///
    /// Calls with the [`Level::None`] or [`Level::Disabled`] sentinels are
    /// ignored; they are thresholds, not message severities.
    fn log(&self, severity: Level, message: fmt::Arguments<'_>);

    /// Emits a FATAL message, then terminates the process with a non-zero
    /// status (real backends) or returns normally ([`EmptyLogger`](crate::EmptyLogger)).
    fn fatal(&self, message: fmt::Arguments<'_>);

    /// Derives a child logger bound to `namespace`, inheriting this logger's
    /// destination and configuration. The child starts with no override of
    /// its own.
    fn sub_logger(&self, namespace: &str) -> Box<dyn Logger>;

    /// Emits a message tagged with the site of the originating call.
    ///
    /// Backends that render a file-name prefix override this; the default
    /// discards the site and delegates to [`log`](Self::log).
    fn log_at(&self, severity: Level, site: Option<CallSite>, message: fmt::Arguments<'_>) {
        let _ = site;
        self.log(severity, message);
    }

    /// Emits a FATAL message tagged with the site of the originating call.
    ///
    /// Same termination contract as [`fatal`](Self::fatal), which the default
    /// delegates to after discarding the site.
    fn fatal_at(&self, site: Option<CallSite>, message: fmt::Arguments<'_>) {
        let _ = site;
        self.fatal(message);
    }

    /// Emits an ERROR message.
    fn error(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Error, message);
    }

    /// Emits a WARN message.
    fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, message);
    }

    /// Emits an INFO message.
    fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, message);
    }

    /// Emits a DEBUG message.
    fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, message);
    }

    /// Emits a TRACE message.
    ///
    /// Backends without a native TRACE concept degrade the call to the next
    /// coarser level they support rather than dropping it.
    fn trace(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Trace, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_file_strips_directories() {
        let site = CallSite { file: "crates/logging/src/logger.rs", line: 7 };
        assert_eq!(site.short_file(), "logger.rs");

        let windows = CallSite { file: r"crates\logging\src\logger.rs", line: 7 };
        assert_eq!(windows.short_file(), "logger.rs");
    }

    #[test]
    fn short_file_keeps_bare_names() {
        let site = CallSite { file: "build.rs", line: 1 };
        assert_eq!(site.short_file(), "build.rs");
    }
}
