#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/structured/src/lib.rs
//!
//! # Overview
//!
//! `structured` is the machine-readable backend for the lantern logging
//! facade: a [`StructuredLogger`] that emits one self-describing JSON record
//! per visible call, with `timestamp`, `level`, `namespace`, and `message`
//! fields. Pretty mode switches to a multi-line rendering for humans.
//!
//! # Design
//!
//! This backend is the consumer of the facade's change notifier. At build
//! time it snapshots the control's level into a cached atomic threshold and
//! registers a handler with
//! [`LevelControl::on_change`](logging::LevelControl::on_change); every
//! subsequent [`set`](logging::LevelControl::set) refreshes the cache before
//! returning, so the logger never reads the control on the hot path.
//! Sub-loggers share the cache, the sink, and the pretty flag. The handler
//! holds the cache weakly: dropping the last logger of a family turns its
//! handler into a no-op instead of pinning the cache for the life of the
//! control.
//!
//! The record vocabulary is `fatal`/`error`/`warn`/`info`/`debug`; TRACE has
//! no native entry and degrades to a `debug` record rather than being
//! dropped.
//!
//! # Examples
//!
//! ```no_run
//! use logging::{info_log, trace_log};
//! use structured::StructuredLogger;
//!
//! let log = StructuredLogger::builder().namespace("app").build()?;
//! info_log!(log, "starting application");
//! trace_log!(log, "emitted as a debug record");
//! # Ok::<(), logging::BuildError>(())
//! ```

mod logger;
mod record;

pub use logger::{StructuredBuilder, StructuredLogger};
