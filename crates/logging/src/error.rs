//! crates/logging/src/error.rs
//! Construction-time errors shared by the backends.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error building a logger.
///
/// Construction failures surface to the caller as an explicit result; they
/// never terminate the process. Once a logger is built, emission is
/// best-effort and write failures are swallowed, so this is the only error
/// channel in the facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The redirect file passed to `output_file` could not be opened or
    /// created.
    #[error("cannot open log file {}: {source}", path.display())]
    OpenLogFile {
        /// Path the builder attempted to open in create/append mode.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
