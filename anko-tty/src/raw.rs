//! Raw mode line-discipline sessions
//!
//! `RawMode` captures the terminal's original termios settings, applies a
//! raw configuration derived from them, and restores the original on drop.
//! Restoration on every exit path matters: a process that dies and leaves
//! the terminal raw breaks the user's shell.

use std::io;
use std::os::fd::AsRawFd;

use nix::errno::Errno;
use nix::sys::termios::{
    self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices,
};
use nix::unistd;

use crate::error::{Result, TtyError};

/// An active raw-mode session holding the original terminal settings
pub struct RawMode {
    original: termios::Termios,
}

impl RawMode {
    /// Capture the current terminal settings and switch to raw mode
    ///
    /// Raw mode disables echo, canonical (line-buffered) input, signal
    /// keys, and implementation-defined input extensions; on input it turns
    /// off software flow control, CR-to-NL translation, break interrupts,
    /// parity checking, and bit stripping; output post-processing is off
    /// and character frames are 8-bit. `VMIN = 0` / `VTIME = 1` bound every
    /// read at 100 ms so the caller never blocks indefinitely.
    pub fn enable() -> Result<Self> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(&stdin).map_err(TtyError::GetAttributes)?;

        let mut raw = original.clone();
        raw.input_flags &= !(InputFlags::BRKINT
            | InputFlags::ICRNL
            | InputFlags::INPCK
            | InputFlags::ISTRIP
            | InputFlags::IXON);
        raw.output_flags &= !OutputFlags::OPOST;
        raw.control_flags |= ControlFlags::CS8;
        raw.local_flags &=
            !(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 1;

        termios::tcsetattr(&stdin, SetArg::TCSAFLUSH, &raw).map_err(TtyError::SetAttributes)?;
        log::debug!("raw mode enabled");

        Ok(Self { original })
    }

    /// Read one byte from stdin
    ///
    /// Returns `Ok(None)` when the read timed out with no data pending;
    /// the caller treats that as "no input yet", not as an error.
    pub fn read_byte(&self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match unistd::read(io::stdin().as_raw_fd(), &mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(Errno::EAGAIN) => Ok(None),
            Err(e) => Err(TtyError::Io(io::Error::from(e))),
        }
    }

    /// Write the whole buffer to stdout
    ///
    /// The caller hands in one fully composed frame; this loops only when
    /// the kernel accepts a short write, so the terminal still sees a
    /// single update.
    pub fn write(&self, mut bytes: &[u8]) -> Result<()> {
        let stdout = io::stdout();
        while !bytes.is_empty() {
            match unistd::write(&stdout, bytes) {
                Ok(0) => return Err(TtyError::Io(io::ErrorKind::WriteZero.into())),
                Ok(n) => bytes = &bytes[n..],
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(TtyError::Io(io::Error::from(e))),
            }
        }
        Ok(())
    }
}

impl Drop for RawMode {
    /// Reapply the captured original settings
    ///
    /// Runs exactly once per session, on every exit path including panic
    /// unwinding. Failure here is logged and swallowed; there is nothing
    /// left to do with a terminal that refuses its own settings back.
    fn drop(&mut self) {
        if let Err(e) = termios::tcsetattr(io::stdin(), SetArg::TCSAFLUSH, &self.original) {
            log::warn!("failed to restore terminal attributes: {}", e);
        }
    }
}
