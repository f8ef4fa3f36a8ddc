//! crates/console/src/flags.rs
//! Bitmask controlling what the console backend prepends to each line.

use std::ops::BitOr;

/// Prefix selection for console output lines.
///
/// The default prepends both the date and the time, so a line looks like
/// `2026/08/23 14:02:07 [INFO ] [app] started`. Adding
/// [`PrefixFlags::FILE`] inserts the short file name and line of the
/// originating call (as captured by the `*_log!` macros) after the
/// timestamp: `2026/08/23 14:02:07 main.rs:42 [INFO ] [app] started`.
/// Combine flags with `|` and pass [`PrefixFlags::NONE`] to emit bare
/// `[LEVEL] [namespace] message` lines.
///
/// # Examples
///
/// ```
/// use console::PrefixFlags;
///
/// let flags = PrefixFlags::DATE | PrefixFlags::TIME | PrefixFlags::FILE;
/// assert!(flags.contains(PrefixFlags::FILE));
/// assert!(!PrefixFlags::NONE.contains(PrefixFlags::TIME));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PrefixFlags(u8);

impl PrefixFlags {
    /// No prefix; lines start with the level token.
    pub const NONE: Self = Self(0);
    /// Prepend the UTC date as `YYYY/MM/DD`.
    pub const DATE: Self = Self(1);
    /// Prepend the UTC time as `HH:MM:SS`.
    pub const TIME: Self = Self(1 << 1);
    /// Prepend the call site as `file.rs:line`.
    ///
    /// Only calls made through the `*_log!` macros carry a site; direct
    /// trait-method calls render without this component.
    pub const FILE: Self = Self(1 << 2);

    /// Reports whether every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the combination of both flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for PrefixFlags {
    fn default() -> Self {
        Self::DATE.union(Self::TIME)
    }
}

impl BitOr for PrefixFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}
