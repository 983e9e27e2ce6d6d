//! Cursor state management
//!
//! The cursor tracks the current edit position within the viewport and
//! moves one cell at a time in response to navigation commands.

use crate::command::Command;

/// Cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Row position (0-indexed from top of the viewport)
    pub row: usize,
    /// Column position (0-indexed)
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a navigation command, moving by exactly one cell
    ///
    /// Upward and leftward moves saturate at zero. The minimal model holds
    /// no text, so downward and rightward moves are unbounded; clamping
    /// against content dimensions belongs here once content exists, not in
    /// the renderer.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveUp => self.row = self.row.saturating_sub(1),
            Command::MoveDown => self.row += 1,
            Command::MoveLeft => self.col = self.col.saturating_sub(1),
            Command::MoveRight => self.col += 1,
            Command::Quit | Command::NoOp => {}
        }
    }
}
