//! VT100 escape sequences
//!
//! The exact byte sequences emitted by the renderer and the teardown path.
//! Cursor coordinates on the wire are 1-indexed.

/// Clear the entire screen
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";

/// Move the cursor to the top-left corner
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Hide the cursor
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";

/// Show the cursor
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

/// Erase from the cursor to the end of the line
pub const ERASE_TO_EOL: &[u8] = b"\x1b[K";

/// Absolute cursor move to a 1-indexed row and column
pub fn cursor_goto(row: usize, col: usize) -> String {
    format!("\x1b[{};{}H", row, col)
}
