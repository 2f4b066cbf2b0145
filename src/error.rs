//! Error types for the pdfsift library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors surfaced by the library.
///
/// Per-stage decode failures are not represented here: each decoder carries
/// its own error type and the pipeline recovers from those locally.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
