//! Append buffer for frame composition
//!
//! One frame's worth of escape sequences and text accumulates here and is
//! flushed to the terminal as a single write. Many small writes tear
//! visibly on real terminals; one write per frame keeps the update atomic.

/// Accumulates one frame of terminal output
#[derive(Debug, Default)]
pub struct Frame {
    buf: Vec<u8>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the frame
    ///
    /// Growth is best-effort: when the backing storage cannot grow, the
    /// append is dropped and the frame renders without it. A skipped visual
    /// update is preferable to aborting mid-render.
    pub fn append(&mut self, bytes: &[u8]) {
        if self.buf.try_reserve(bytes.len()).is_err() {
            log::warn!("frame append dropped: cannot grow buffer by {} bytes", bytes.len());
            return;
        }
        self.buf.extend_from_slice(bytes);
    }

    /// Total bytes accumulated
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The composed frame bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_empty() {
        let frame = Frame::new();
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
        assert_eq!(frame.as_bytes(), b"");
    }

    #[test]
    fn test_append_accumulates_in_order() {
        let mut frame = Frame::new();
        frame.append(b"\x1b[2J");
        frame.append(b"hello");
        assert_eq!(frame.as_bytes(), b"\x1b[2Jhello");
        assert_eq!(frame.len(), 9);
    }

    #[test]
    fn test_append_empty_slice() {
        let mut frame = Frame::new();
        frame.append(b"");
        assert!(frame.is_empty());
    }
}
