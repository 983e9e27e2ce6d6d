//! Window size discovery
//!
//! The kernel's TIOCGWINSZ ioctl is the primary source. Some serial lines
//! and containers report zero columns or fail the ioctl outright; for
//! those, the fallback moves the cursor to the bottom-right corner and
//! asks the terminal where it ended up via a cursor position report.

use std::io;

use crate::error::{Result, TtyError};
use crate::raw::RawMode;

/// Cursor to the extreme bottom-right: a 999-cell move right and down,
/// clamped by the terminal at the viewport edge
const CURSOR_TO_CORNER: &[u8] = b"\x1b[999C\x1b[999B";

/// Device status report 6: request a cursor position report
const CURSOR_REPORT: &[u8] = b"\x1b[6n";

/// Reply buffer bound; a full reply is `ESC [ rows ; cols R`
const REPLY_MAX: usize = 32;

/// Window size in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Number of rows
    pub rows: u16,
    /// Number of columns
    pub cols: u16,
}

impl WindowSize {
    /// Create a new window size
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { rows, cols }
    }

    /// Discover the viewport size, never returning a zero dimension
    ///
    /// Rendering against a zero-sized viewport cannot work, so discovery
    /// failure is fatal to startup rather than defaulted around.
    pub fn discover(raw: &RawMode) -> Result<Self> {
        match Self::from_ioctl() {
            Ok(size) if size.rows > 0 && size.cols > 0 => Ok(size),
            Ok(size) => {
                log::debug!("ioctl reported {}x{}, probing cursor position", size.rows, size.cols);
                Self::from_cursor_probe(raw)
            }
            Err(e) => {
                log::debug!("TIOCGWINSZ failed ({}), probing cursor position", e);
                Self::from_cursor_probe(raw)
            }
        }
    }

    /// Query the kernel for the window size of stdout
    fn from_ioctl() -> Result<Self> {
        let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ as libc::c_ulong, &mut ws) };
        if result == -1 {
            Err(TtyError::WindowSize(io::Error::last_os_error().to_string()))
        } else {
            Ok(Self::from(ws))
        }
    }

    /// Measure the viewport by parking the cursor at the bottom-right
    /// corner and reading back its reported position
    fn from_cursor_probe(raw: &RawMode) -> Result<Self> {
        raw.write(CURSOR_TO_CORNER)?;
        raw.write(CURSOR_REPORT)?;

        let mut reply = Vec::with_capacity(REPLY_MAX);
        while reply.len() < REPLY_MAX {
            match raw.read_byte()? {
                Some(byte) => {
                    reply.push(byte);
                    if byte == b'R' {
                        break;
                    }
                }
                // terminal stopped answering; whatever arrived is all
                // the parser gets
                None => break,
            }
        }

        parse_cursor_report(&reply).ok_or(TtyError::MalformedReply)
    }
}

impl From<libc::winsize> for WindowSize {
    fn from(ws: libc::winsize) -> Self {
        Self {
            rows: ws.ws_row,
            cols: ws.ws_col,
        }
    }
}

/// Parse a cursor position report of the form `ESC [ rows ; cols R`
///
/// Anything else - missing escape prefix, missing terminator, non-integer
/// fields, a zero dimension - is rejected.
fn parse_cursor_report(reply: &[u8]) -> Option<WindowSize> {
    let payload = reply.strip_prefix(b"\x1b[")?.strip_suffix(b"R")?;
    let payload = std::str::from_utf8(payload).ok()?;
    let (rows, cols) = payload.split_once(';')?;
    let rows: u16 = rows.parse().ok()?;
    let cols: u16 = cols.parse().ok()?;
    if rows == 0 || cols == 0 {
        return None;
    }
    Some(WindowSize { rows, cols })
}
