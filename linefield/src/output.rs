//! Redraw instruction generation.
//!
//! Every engine transition yields an [`Output`]: an iterator over byte
//! slices that updates exactly the screen region the transition
//! touched. Nothing here allocates; cursor coordinates are rendered
//! into bytes with [`UintToBytes`].

use crate::field_buffer::{Buffer, FieldBuffer};
use crate::terminal::{Cursor, Origin};

const CURSOR_LEFT: &[u8] = b"\x1b[D";
const CURSOR_RIGHT: &[u8] = b"\x1b[C";
const SAVE_CURSOR: &[u8] = b"\x1b[s";
const ERASE_TO_END: &[u8] = b"\x1b[K";

/// What a transition needs painted.
#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone)]
pub(crate) enum Redraw {
    Nothing,
    /// One column left, no content change.
    StepLeft,
    /// One column right, no content change.
    StepRight,
    /// Absolute reposition to the current cursor.
    MoveToCursor,
    /// Erase from the current column and repaint `content[from..]`,
    /// then reposition to the cursor.
    RepaintTail { from: usize },
    /// Backspace: one column left first, then erase and repaint.
    StepLeftRepaintTail { from: usize },
    Done,
    Cancelled,
}

/// One unit of output. [`Done`](OutputItem::Done) and
/// [`Cancelled`](OutputItem::Cancelled) carry no bytes; they tell the
/// editor loop the session ended.
#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone)]
pub enum OutputItem<'a> {
    Slice(&'a [u8]),
    Uint(UintToBytes<4>),
    Done,
    Cancelled,
}

impl<'a> OutputItem<'a> {
    pub fn get_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Slice(slice) => Some(slice),
            Self::Uint(uint) => Some(uint.as_bytes()),
            Self::Done | Self::Cancelled => None,
        }
    }
}

/// Decimal rendering of an unsigned integer into a fixed-size byte
/// array.
#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone)]
pub struct UintToBytes<const N: usize> {
    digits: [u8; N],
    start: usize,
}

impl<const N: usize> UintToBytes<N> {
    fn from_uint(mut n: usize) -> Option<Self> {
        let mut digits = [b'0'; N];
        let mut start = N;

        for i in (0..N).rev() {
            digits[i] = b'0' + (n % 10) as u8;
            n /= 10;
            start = i;

            if n == 0 {
                break;
            }
        }

        if n == 0 {
            Some(Self { digits, start })
        } else {
            None
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.digits[self.start..]
    }
}

#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone)]
enum MoveCursorState {
    Prefix,
    Row,
    Separator,
    Column,
    FinalByte,
    Done,
}

/// Iterator form of the absolute cursor-position sequence
/// `ESC [ row+1 ; column+1 H`.
#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone)]
struct MoveCursor {
    state: MoveCursorState,
    cursor: Cursor,
}

impl MoveCursor {
    fn new(cursor: Cursor) -> Self {
        Self {
            state: MoveCursorState::Prefix,
            cursor,
        }
    }
}

impl Iterator for MoveCursor {
    type Item = OutputItem<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            MoveCursorState::Prefix => {
                self.state = MoveCursorState::Row;
                Some(OutputItem::Slice(b"\x1b["))
            }
            MoveCursorState::Row => {
                self.state = MoveCursorState::Separator;

                // Four digits cover any real terminal.
                Some(OutputItem::Uint(
                    UintToBytes::from_uint(self.cursor.row + 1).unwrap(),
                ))
            }
            MoveCursorState::Separator => {
                self.state = MoveCursorState::Column;
                Some(OutputItem::Slice(b";"))
            }
            MoveCursorState::Column => {
                self.state = MoveCursorState::FinalByte;

                Some(OutputItem::Uint(
                    UintToBytes::from_uint(self.cursor.column + 1).unwrap(),
                ))
            }
            MoveCursorState::FinalByte => {
                self.state = MoveCursorState::Done;
                Some(OutputItem::Slice(b"H"))
            }
            MoveCursorState::Done => None,
        }
    }
}

#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone)]
enum Step<'a> {
    Slice(&'a [u8]),
    Move(MoveCursor),
    Done,
    Cancelled,
    Emitted,
}

impl<'a> Step<'a> {
    fn advance(&mut self) -> Option<OutputItem<'a>> {
        if let Step::Move(move_cursor) = self {
            return move_cursor.next();
        }

        match core::mem::replace(self, Step::Emitted) {
            Step::Slice(slice) => Some(OutputItem::Slice(slice)),
            Step::Done => Some(OutputItem::Done),
            Step::Cancelled => Some(OutputItem::Cancelled),
            Step::Emitted | Step::Move(_) => None,
        }
    }
}

/// Iterator over the byte slices of one redraw.
pub struct Output<'a> {
    steps: [Step<'a>; 5],
    index: usize,
}

impl<'a> Output<'a> {
    pub(crate) fn new<B: Buffer>(
        redraw: Redraw,
        buffer: &'a FieldBuffer<B>,
        origin: Origin,
    ) -> Self {
        let reposition = Step::Move(MoveCursor::new(origin.cursor_at(buffer.cursor())));
        let mut steps = [Step::Emitted; 5];

        match redraw {
            Redraw::Nothing => {}
            Redraw::StepLeft => steps[0] = Step::Slice(CURSOR_LEFT),
            Redraw::StepRight => steps[0] = Step::Slice(CURSOR_RIGHT),
            Redraw::MoveToCursor => steps[0] = reposition,
            Redraw::RepaintTail { from } => {
                steps[0] = Step::Slice(SAVE_CURSOR);
                steps[1] = Step::Slice(ERASE_TO_END);
                steps[2] = Step::Slice(buffer.tail(from).as_bytes());
                steps[3] = reposition;
            }
            Redraw::StepLeftRepaintTail { from } => {
                steps[0] = Step::Slice(CURSOR_LEFT);
                steps[1] = Step::Slice(SAVE_CURSOR);
                steps[2] = Step::Slice(ERASE_TO_END);
                steps[3] = Step::Slice(buffer.tail(from).as_bytes());
                steps[4] = reposition;
            }
            Redraw::Done => steps[0] = Step::Done,
            Redraw::Cancelled => steps[0] = Step::Cancelled,
        }

        Self { steps, index: 0 }
    }
}

impl<'a> Iterator for Output<'a> {
    type Item = OutputItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.steps.get_mut(self.index) {
            if let Some(item) = step.advance() {
                return Some(item);
            }

            self.index += 1;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_buffer::StaticBuffer;
    use std::string::String;
    use std::vec::Vec;

    fn to_string(output: Output<'_>) -> String {
        String::from_utf8(
            output
                .flat_map(|item| {
                    item.get_bytes()
                        .map(|bytes| bytes.to_vec())
                        .unwrap_or_default()
                })
                .collect::<Vec<u8>>(),
        )
        .unwrap()
    }

    #[test]
    fn uint_to_bytes() {
        fn render<const N: usize>(n: usize) -> String {
            let uint: UintToBytes<N> = UintToBytes::from_uint(n).unwrap();

            String::from_utf8(uint.as_bytes().to_vec()).unwrap()
        }

        assert_eq!(render::<4>(0), "0");
        assert_eq!(render::<4>(7), "7");
        assert_eq!(render::<4>(42), "42");
        assert_eq!(render::<4>(9999), "9999");

        assert!(UintToBytes::<4>::from_uint(10000).is_none());
    }

    #[test]
    fn move_cursor() {
        fn render(cursor: Cursor) -> String {
            String::from_utf8(
                MoveCursor::new(cursor)
                    .flat_map(|item| item.get_bytes().unwrap().to_vec())
                    .collect(),
            )
            .unwrap()
        }

        assert_eq!(render(Cursor::new(0, 0)), "\x1b[1;1H");
        assert_eq!(render(Cursor::new(10, 45)), "\x1b[11;46H");
        assert_eq!(render(Cursor::new(42, 0)), "\x1b[43;1H");
        assert_eq!(render(Cursor::new(0, 9)), "\x1b[1;10H");
    }

    #[test]
    fn redraw_sequences() {
        let origin = Origin::new(10, 45);
        let mut buffer = FieldBuffer::<StaticBuffer<8>>::new_static();

        assert!(buffer.insert(b'h'));
        assert!(buffer.insert(b'i'));

        // Insert repaints from the old cursor column and repositions
        // one past it.
        assert_eq!(
            to_string(Output::new(Redraw::RepaintTail { from: 1 }, &buffer, origin)),
            "\x1b[s\x1b[Ki\x1b[11;48H"
        );

        assert_eq!(
            to_string(Output::new(Redraw::StepLeft, &buffer, origin)),
            "\x1b[D"
        );
        assert_eq!(
            to_string(Output::new(Redraw::StepRight, &buffer, origin)),
            "\x1b[C"
        );
        assert_eq!(
            to_string(Output::new(Redraw::MoveToCursor, &buffer, origin)),
            "\x1b[11;48H"
        );

        assert!(buffer.backspace());
        assert_eq!(
            to_string(Output::new(
                Redraw::StepLeftRepaintTail { from: 1 },
                &buffer,
                origin
            )),
            "\x1b[D\x1b[s\x1b[K\x1b[11;47H"
        );

        assert_eq!(to_string(Output::new(Redraw::Nothing, &buffer, origin)), "");
    }

    #[test]
    fn session_end_markers() {
        let origin = Origin::new(0, 0);
        let buffer = FieldBuffer::<StaticBuffer<4>>::new_static();

        let items: Vec<_> = Output::new(Redraw::Done, &buffer, origin).collect();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], OutputItem::Done));
        assert!(items[0].get_bytes().is_none());

        let items: Vec<_> = Output::new(Redraw::Cancelled, &buffer, origin).collect();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], OutputItem::Cancelled));
    }
}
