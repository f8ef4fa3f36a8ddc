//! crates/console/src/colour.rs
//! ANSI colour escapes for the colourized console variant.

use logging::Level;

/// ANSI colour applied to a level token.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Colour {
    Red = 31,
    Green = 32,
    Yellow = 33,
}

impl Colour {
    pub(crate) const fn code(self) -> u8 {
        self as u8
    }
}

/// Colour mapping for severities: FATAL/ERROR are red, WARN yellow, INFO
/// green, everything else uncoloured.
pub(crate) const fn for_level(level: Level) -> Option<Colour> {
    match level {
        Level::Fatal | Level::Error => Some(Colour::Red),
        Level::Warn => Some(Colour::Yellow),
        Level::Info => Some(Colour::Green),
        _ => None,
    }
}

/// Wraps `text` in a bold ANSI colour escape.
pub(crate) fn paint(text: &str, colour: Colour) -> String {
    format!("\x1b[{};1m{text}\x1b[0m", colour.code())
}
