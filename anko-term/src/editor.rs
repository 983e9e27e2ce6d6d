//! Editor loop
//!
//! Owns the session state end to end: the raw-mode guard, the discovered
//! viewport dimensions, and the cursor. The loop is single-threaded and
//! cooperative; the only blocking point is the bounded read inside
//! `input::next_command`.

use anko_core::{escape, render, Command, Cursor, Dimensions};
use anko_tty::{RawMode, Result, WindowSize};

use crate::input;

/// Editor session state
///
/// Declaration order carries the teardown order: the `Drop` impl blanks
/// the screen first, then the `tty` field's own drop restores the original
/// line discipline.
pub struct Editor {
    tty: RawMode,
    dims: Dimensions,
    cursor: Cursor,
}

impl Editor {
    /// Enter raw mode and size the viewport
    pub fn new() -> Result<Self> {
        let tty = RawMode::enable()?;

        let size = match WindowSize::discover(&tty) {
            Ok(size) => size,
            Err(e) => {
                // the probe may have parked the cursor in a corner; blank
                // the screen before the raw guard restores the terminal
                let _ = tty.write(escape::CLEAR_SCREEN);
                let _ = tty.write(escape::CURSOR_HOME);
                return Err(e);
            }
        };

        let dims = Dimensions::new(size.cols as usize, size.rows as usize);
        log::debug!("viewport {} rows x {} cols", dims.rows, dims.cols);

        Ok(Self {
            tty,
            dims,
            cursor: Cursor::new(),
        })
    }

    /// Drive the render-read-apply cycle until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh()?;
            match input::next_command(&self.tty)? {
                Command::Quit => return Ok(()),
                command => self.cursor.apply(command),
            }
        }
    }

    /// Compose one frame and flush it in a single write
    fn refresh(&self) -> Result<()> {
        let frame = render::draw(self.dims, self.cursor);
        self.tty.write(frame.as_bytes())
    }
}

impl Drop for Editor {
    /// Leave a blank screen behind on every exit path, clean or fatal
    fn drop(&mut self) {
        let _ = self.tty.write(escape::CLEAR_SCREEN);
        let _ = self.tty.write(escape::CURSOR_HOME);
    }
}

/// Construct an editor and drive it to completion
pub fn run() -> Result<()> {
    let mut editor = Editor::new()?;
    editor.run()
}
