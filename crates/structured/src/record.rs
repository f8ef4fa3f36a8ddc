//! crates/structured/src/record.rs
//! The self-describing record emitted for each visible call.

use logging::Level;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// One structured log record.
///
/// Field encoding is owned by this backend: `timestamp` is RFC 3339 UTC,
/// `level` is the lower-case label of the record vocabulary, `namespace` is
/// the logger's label, and `message` is the rendered template.
#[derive(Debug, Serialize)]
pub(crate) struct Record<'a> {
    pub timestamp: String,
    pub level: &'static str,
    pub namespace: &'a str,
    pub message: String,
}

impl<'a> Record<'a> {
    pub(crate) fn new(severity: Level, namespace: &'a str, message: String) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
            level: record_label(severity),
            namespace,
            message,
        }
    }
}

/// Maps a severity onto the record vocabulary.
///
/// The vocabulary has no native TRACE entry, so TRACE degrades to the next
/// coarser level it does support: `debug`. Dropping the most verbose level
/// entirely would make maximum verbosity surprisingly silent.
pub(crate) const fn record_label(severity: Level) -> &'static str {
    match severity {
        Level::Fatal => "fatal",
        Level::Error => "error",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug | Level::Trace => "debug",
        Level::None | Level::Disabled => "",
    }
}
