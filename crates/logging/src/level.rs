//! crates/logging/src/level.rs
//! Severity levels, string mappings, and the visibility rule.

use std::fmt;

/// Ordered severity of a log message or threshold.
///
/// The ordinal ordering runs from most severe to most verbose:
/// `Fatal < Error < Warn < Info < Debug < Trace`. A message is visible when
/// its severity is at or below the active threshold, so raising the threshold
/// towards [`Level::Trace`] shows more output. Two sentinels sit below the
/// named severities: [`Level::Disabled`] suppresses everything and
/// [`Level::None`] means "unset" (an instance with a `None` override defers
/// to the shared [`LevelControl`](crate::LevelControl)).
///
/// # Examples
///
/// ```
/// use logging::Level;
///
/// assert!(Level::Error < Level::Info);
/// assert!(Level::is_visible(Level::Warn, Level::Warn));
/// assert!(!Level::is_visible(Level::Debug, Level::Warn));
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Unset or unrecognized. Not a real severity; instances with a `None`
    /// override defer to the global level, and `None` as a threshold emits
    /// nothing.
    None = 0,
    /// Suppress every severity.
    Disabled = 1,
    /// Unrecoverable application state. Emitting at this severity terminates
    /// the process on every real backend.
    Fatal = 2,
    /// Recoverable failure worth surfacing.
    Error = 3,
    /// Suspicious but non-failing condition.
    Warn = 4,
    /// Routine operational message.
    Info = 5,
    /// Developer diagnostics.
    Debug = 6,
    /// Most verbose diagnostics.
    Trace = 7,
}

impl Level {
    /// All levels in ordinal order, sentinels first.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// let names: Vec<&str> = Level::ALL.into_iter().map(Level::as_str).collect();
    /// assert_eq!(
    ///     names,
    ///     ["NONE", "DISABLED", "FATAL", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"],
    /// );
    /// ```
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Disabled,
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns the canonical upper-case name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Disabled => "DISABLED",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Parses a level from its name, case-insensitively.
    ///
    /// Unrecognized input yields [`Level::None`] rather than an error; callers
    /// that need to detect invalid configuration must check for `None`
    /// themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::from_name("info"), Level::Info);
    /// assert_eq!(Level::from_name("WaRn"), Level::Warn);
    /// assert_eq!(Level::from_name("bogus"), Level::None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        for level in Self::ALL {
            if name.eq_ignore_ascii_case(level.as_str()) {
                return level;
            }
        }
        Self::None
    }

    /// Decodes a level from its ordinal representation.
    ///
    /// Values outside the named range yield `None`.
    #[must_use]
    pub const fn from_repr(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Disabled),
            2 => Some(Self::Fatal),
            3 => Some(Self::Error),
            4 => Some(Self::Warn),
            5 => Some(Self::Info),
            6 => Some(Self::Debug),
            7 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Reports whether a message at `message` severity passes `threshold`.
    ///
    /// The rule is `threshold != Disabled && message <= threshold` under the
    /// ordinal ordering. A `None` threshold admits nothing because every real
    /// severity sits above it.
    #[must_use]
    pub const fn is_visible(message: Self, threshold: Self) -> bool {
        !matches!(threshold, Self::Disabled) && message as u8 <= threshold as u8
    }

    /// Reports whether the level is the unset sentinel.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a level name, case-insensitively; unrecognized names yield
/// [`Level::None`].
///
/// Free-function alias for [`Level::from_name`], kept for parity with the
/// process-wide surface ([`set_global_level`](crate::set_global_level) and
/// friends).
#[must_use]
pub fn level_from_string(name: &str) -> Level {
    Level::from_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_name(level.as_str()), level);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Level::from_name("info"), Level::Info);
        assert_eq!(Level::from_name("INFO"), Level::Info);
        assert_eq!(Level::from_name("iNfO"), Level::Info);
        assert_eq!(Level::from_name("disabled"), Level::Disabled);
    }

    #[test]
    fn from_name_degrades_to_none() {
        assert_eq!(Level::from_name("bogus"), Level::None);
        assert_eq!(Level::from_name(""), Level::None);
        assert_eq!(Level::from_name("warned"), Level::None);
    }

    #[test]
    fn level_from_string_matches_from_name() {
        assert_eq!(level_from_string("INFO"), Level::Info);
        assert_eq!(level_from_string("bogus"), Level::None);
    }

    #[test]
    fn ordinals_increase_with_verbosity() {
        let ordinals: Vec<u8> = Level::ALL.into_iter().map(|l| l as u8).collect();
        assert_eq!(ordinals, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(Level::Fatal < Level::Trace);
    }

    #[test]
    fn from_repr_rejects_out_of_range() {
        for level in Level::ALL {
            assert_eq!(Level::from_repr(level as u8), Some(level));
        }
        assert_eq!(Level::from_repr(8), None);
        assert_eq!(Level::from_repr(255), None);
    }

    #[test]
    fn warn_threshold_admits_severe_and_rejects_verbose() {
        assert!(Level::is_visible(Level::Fatal, Level::Warn));
        assert!(Level::is_visible(Level::Error, Level::Warn));
        assert!(Level::is_visible(Level::Warn, Level::Warn));
        assert!(!Level::is_visible(Level::Info, Level::Warn));
        assert!(!Level::is_visible(Level::Debug, Level::Warn));
        assert!(!Level::is_visible(Level::Trace, Level::Warn));
    }

    #[test]
    fn disabled_threshold_rejects_everything() {
        for level in Level::ALL {
            assert!(!Level::is_visible(level, Level::Disabled));
        }
    }

    #[test]
    fn none_threshold_admits_nothing_real() {
        assert!(!Level::is_visible(Level::Fatal, Level::None));
        assert!(!Level::is_visible(Level::Trace, Level::None));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(format!("{}", Level::Trace), "TRACE");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn level_serde_round_trip() {
            for level in Level::ALL {
                let json = serde_json::to_string(&level).unwrap();
                let decoded: Level = serde_json::from_str(&json).unwrap();
                assert_eq!(level, decoded);
            }
        }
    }
}
