//! Frame composition
//!
//! Builds one complete screen update: hide the cursor, redraw every
//! viewport row, place the cursor, show it again. The caller flushes the
//! result in a single write. Composition is deterministic: the same
//! dimensions and cursor always yield byte-identical frames.

use crate::cursor::Cursor;
use crate::escape;
use crate::frame::Frame;
use crate::geometry::Dimensions;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compose a full-screen frame for the given viewport and cursor
pub fn draw(dims: Dimensions, cursor: Cursor) -> Frame {
    let mut frame = Frame::new();

    frame.append(escape::HIDE_CURSOR);
    frame.append(escape::CURSOR_HOME);

    draw_rows(dims, &mut frame);

    frame.append(escape::cursor_goto(cursor.row + 1, cursor.col + 1).as_bytes());
    frame.append(escape::SHOW_CURSOR);

    frame
}

/// Draw every viewport row
///
/// Each row is a tilde marker, except the center row, which carries the
/// welcome banner. Every row ends with erase-to-end-of-line; every row but
/// the last ends with CRLF, since a newline on the bottom row would scroll
/// the viewport.
fn draw_rows(dims: Dimensions, frame: &mut Frame) {
    for row in 0..dims.rows {
        if row == dims.rows / 2 {
            draw_welcome(dims.cols, frame);
        } else {
            frame.append(b"~");
        }
        frame.append(escape::ERASE_TO_EOL);
        if row + 1 < dims.rows {
            frame.append(b"\r\n");
        }
    }
}

/// Center the welcome banner, truncated to the viewport width
///
/// The first padding column is the row's tilde marker, the rest spaces.
fn draw_welcome(cols: usize, frame: &mut Frame) {
    let welcome = format!("anko editor -- version {}", VERSION);
    let shown = welcome.len().min(cols);

    let mut padding = (cols - shown) / 2;
    if padding > 0 {
        frame.append(b"~");
        padding -= 1;
    }
    frame.append(" ".repeat(padding).as_bytes());
    frame.append(welcome[..shown].as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_draw_is_deterministic() {
        let dims = Dimensions::new(80, 24);
        let cursor = Cursor { row: 3, col: 7 };
        assert_eq!(draw(dims, cursor).as_bytes(), draw(dims, cursor).as_bytes());
    }

    #[test]
    fn test_cursor_placement_is_one_indexed() {
        let frame = draw(Dimensions::new(80, 24), Cursor::new());
        assert_eq!(count_occurrences(frame.as_bytes(), b"\x1b[1;1H"), 1);
    }

    #[test]
    fn test_frame_hides_cursor_first_shows_it_last() {
        let frame = draw(Dimensions::new(80, 24), Cursor::new());
        assert!(frame.as_bytes().starts_with(b"\x1b[?25l"));
        assert!(frame.as_bytes().ends_with(b"\x1b[?25h"));
    }

    #[test]
    fn test_single_row_viewport_has_no_newline() {
        let frame = draw(Dimensions::new(80, 1), Cursor::new());
        assert_eq!(count_occurrences(frame.as_bytes(), b"\r\n"), 0);
    }

    #[test]
    fn test_welcome_row_is_centered() {
        let frame = draw(Dimensions::new(80, 24), Cursor::new());
        let welcome = format!("anko editor -- version {}", VERSION);
        // the first padding column is the tilde marker, the rest spaces
        let padding = (80 - welcome.len()) / 2;
        let expected = format!("~{}{}", " ".repeat(padding - 1), welcome);
        assert_eq!(count_occurrences(frame.as_bytes(), expected.as_bytes()), 1);
    }

    #[test]
    fn test_narrow_viewport_truncates_welcome() {
        let frame = draw(Dimensions::new(10, 24), Cursor::new());
        let bytes = frame.as_bytes();
        assert_eq!(count_occurrences(bytes, b"anko edito"), 1);
        assert_eq!(count_occurrences(bytes, b"anko editor"), 0);
    }

    proptest! {
        // One row segment per viewport row, and a CRLF between each
        // adjacent pair of rows, never after the last
        #[test]
        fn frame_has_one_segment_per_row(rows in 1usize..200, cols in 1usize..300) {
            let frame = draw(Dimensions::new(cols, rows), Cursor::new());
            let bytes = frame.as_bytes();
            prop_assert_eq!(count_occurrences(bytes, b"\x1b[K"), rows);
            prop_assert_eq!(count_occurrences(bytes, b"\r\n"), rows - 1);
        }

        // The composed banner row never exceeds the viewport width
        #[test]
        fn welcome_line_never_exceeds_viewport(cols in 1usize..300) {
            // a single-row viewport renders only the banner row, so its
            // content sits between cursor-home and the first erase sequence
            let frame = draw(Dimensions::new(cols, 1), Cursor::new());
            let bytes = frame.as_bytes();
            let start = b"\x1b[?25l\x1b[H".len();
            let erase = bytes
                .windows(3)
                .position(|w| w == b"\x1b[K")
                .expect("row segment missing erase sequence");
            prop_assert!(erase - start <= cols);
        }
    }
}
