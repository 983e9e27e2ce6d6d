//! Input decoding
//!
//! Reads one byte at a time from the raw session and classifies it into a
//! command. Arrow keys arrive as multi-byte escape sequences and are not
//! decoded here; they surface as a burst of `NoOp`s.

use anko_core::Command;
use anko_tty::{RawMode, Result};

/// Block until the next input byte arrives, then decode it
///
/// Each underlying read times out after 100 ms with `None`; looping keeps
/// any single read bounded while still waiting indefinitely for a key.
/// Read errors other than the timeout propagate and are fatal.
pub fn next_command(tty: &RawMode) -> Result<Command> {
    loop {
        if let Some(byte) = tty.read_byte()? {
            return Ok(Command::decode(byte));
        }
    }
}
