#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/console/src/lib.rs
//!
//! # Overview
//!
//! `console` is the console backend for the lantern logging facade: a
//! [`ConsoleLogger`] that renders `[LEVEL] [namespace] message` lines to
//! stdout, an appended file, or any injected writer, with an optional
//! date/time prefix ([`PrefixFlags`]) and an optional ANSI-colourized level
//! token.
//!
//! # Design
//!
//! A logger owns its namespace and an optional level override; the effective
//! threshold falls back to the shared
//! [`LevelControl`](logging::LevelControl) injected at build time, so
//! un-overridden instances track runtime changes to the process-wide level.
//! The sink is a mutex-guarded writer shared with every sub-logger, which
//! keeps concurrent lines from interleaving. Construction is the only
//! fallible step (opening a redirect file); emission is best-effort.
//!
//! # Examples
//!
//! ```no_run
//! use console::ConsoleLogger;
//! use logging::{info_log, warn_log};
//!
//! let log = ConsoleLogger::builder().namespace("app").colour(true).build()?;
//! info_log!(log, "starting application");
//! warn_log!(log, "do not do that");
//!
//! let child = logging::Logger::sub_logger(&log, "app.worker");
//! info_log!(child, "worker ready");
//! # Ok::<(), logging::BuildError>(())
//! ```

mod colour;
mod flags;
mod logger;

pub use flags::PrefixFlags;
pub use logger::{ConsoleBuilder, ConsoleLogger};
