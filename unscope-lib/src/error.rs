//! Errors raised at the I/O edges. The conversion itself never fails.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HostError>;

#[derive(Error, Debug)]
pub enum HostError {
    /// Input could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Clipboard access failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// IO error on a standard stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
