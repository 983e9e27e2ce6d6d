//! Anko TTY - POSIX terminal control
//!
//! This crate owns the process's controlling terminal:
//! - Raw mode line-discipline sessions with guaranteed restoration
//! - Window size discovery (TIOCGWINSZ with a cursor-probe fallback)
//! - Bounded-timeout byte reads from stdin
//! - Single-write frame flushing to stdout
//!
//! Reference: https://man7.org/linux/man-pages/man3/termios.3.html

mod error;
mod raw;
mod size;

pub use error::{Result, TtyError};
pub use raw::RawMode;
pub use size::WindowSize;
