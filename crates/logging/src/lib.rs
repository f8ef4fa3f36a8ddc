#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the core of the lantern facade: the ordered severity
//! [`Level`], the shared [`LevelControl`] that gates emission across
//! independently constructed loggers, the polymorphic [`Logger`] contract
//! implemented by every backend, and the no-op [`EmptyLogger`] placeholder.
//! The concrete backends (plain/colour console, structured JSON) live in
//! sibling crates and depend on this one.
//!
//! # Design
//!
//! The process-wide threshold is a single atomic cell inside a
//! [`LevelControl`]. Changing it via [`LevelControl::set`] (or the
//! process-wide [`set_global_level`]) fires every handler registered with
//! [`LevelControl::on_change`], synchronously and in registration order, so
//! backends that cache a comparison threshold re-synchronize without the
//! caller holding a handle to each instance. The control is an explicit
//! value injected into backends at construction; tests build a fresh one per
//! case instead of relying on hidden process state.
//!
//! Each emission call resolves its effective threshold as "instance override
//! if set, else the control's current level" ([`InstanceLevel::effective`])
//! and applies [`Level::is_visible`]. Messages travel as
//! [`std::fmt::Arguments`], so nothing is formatted for filtered-out calls.
//!
//! # Invariants
//!
//! - Visibility is `threshold != DISABLED && message <= threshold` under the
//!   ordinal ordering `FATAL < ERROR < WARN < INFO < DEBUG < TRACE`.
//! - [`Level::from_name`] never fails; unrecognized names degrade to
//!   [`Level::None`] and callers detect that themselves.
//! - Change handlers fire exactly once per [`LevelControl::set`] call, in
//!   registration order, on the calling thread.
//! - `fatal` on a real backend terminates the process with a non-zero status
//!   even when output is suppressed; [`EmptyLogger`]'s `fatal` returns
//!   normally.
//!
//! # Errors
//!
//! The only fallible operation in the facade is backend construction, which
//! surfaces [`BuildError`]. Emission is infallible from the caller's point of
//! view.
//!
//! # Examples
//!
//! ```
//! use logging::{info_log, warn_log, EmptyLogger, Level, LevelControl};
//!
//! let control = LevelControl::new(Level::Info);
//! control.on_change(|level| {
//!     // Backends use this hook to refresh a cached threshold.
//!     let _ = level;
//! });
//! control.set(Level::Error);
//! assert_eq!(control.current(), Level::Error);
//!
//! let log = EmptyLogger;
//! info_log!(log, "starting {}", "application");
//! warn_log!(log, "do not do that");
//! ```

mod control;
mod empty;
mod error;
mod level;
mod logger;
mod macros;

pub use control::{
    global_level, register_level_change_handler, set_global_level, InstanceLevel,
    LevelChangeHandler, LevelControl,
};
pub use empty::EmptyLogger;
pub use error::BuildError;
pub use level::{level_from_string, Level};
pub use logger::{CallSite, Logger};
