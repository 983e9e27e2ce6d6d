//! Error types for terminal control

use std::io;
use thiserror::Error;

/// Terminal control error type
///
/// Every variant is fatal to the session: a terminal that cannot report
/// its own configuration or size is not a viable full-screen target.
#[derive(Error, Debug)]
pub enum TtyError {
    /// Reading the terminal's line-discipline settings failed
    #[error("Failed to read terminal attributes: {0}")]
    GetAttributes(#[source] nix::Error),

    /// Applying a line-discipline configuration failed
    #[error("Failed to apply terminal attributes: {0}")]
    SetAttributes(#[source] nix::Error),

    /// The kernel could not report the window size
    #[error("Failed to query window size: {0}")]
    WindowSize(String),

    /// The cursor position report could not be parsed
    #[error("Malformed cursor position reply")]
    MalformedReply,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for terminal operations
pub type Result<T> = std::result::Result<T, TtyError>;
