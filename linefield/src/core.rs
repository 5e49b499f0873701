//! Core state machine for editing a field.
//!
//! [`Field`] owns the buffer, the fixed screen origin, the accepted
//! character range and the key decoder. Feed it one byte at a time
//! with [`Field::advance`] and write the returned [`Output`] to the
//! terminal; [`OutputItem::Done`](crate::output::OutputItem) and
//! [`OutputItem::Cancelled`](crate::output::OutputItem) mark the end
//! of the session.

use crate::field_buffer::{Buffer, FieldBuffer};
use crate::input::{AcceptRange, KeyDecoder, KeyEvent};
use crate::output::{Output, Redraw};
use crate::terminal::Origin;

/// How a session ended.
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
#[derive(Copy, Clone)]
pub(crate) enum SessionEnd {
    Entered,
    Cancelled,
}

/// Result of a completed editing session.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission<'a> {
    /// Enter was pressed; the field contents at that moment.
    Entered(&'a str),
    /// Escape was pressed; whatever was typed has been discarded.
    Cancelled,
}

impl<'a> Submission<'a> {
    /// The submitted text, with cancellation collapsed to the empty
    /// string. Note that this makes a cancelled session look like an
    /// empty one; match on the variants to tell them apart.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Submission::Entered(s) => s,
            Submission::Cancelled => "",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(*self, Submission::Cancelled)
    }
}

pub(crate) struct Field<B: Buffer, D: KeyDecoder> {
    buffer: FieldBuffer<B>,
    origin: Origin,
    accept: AcceptRange,
    decoder: D,
}

impl<B: Buffer, D: KeyDecoder> Field<B, D> {
    pub(crate) fn new(buffer: FieldBuffer<B>, origin: Origin, accept: AcceptRange) -> Self {
        Self {
            buffer,
            origin,
            accept,
            decoder: D::default(),
        }
    }

    pub(crate) fn buffer(&self) -> &FieldBuffer<B> {
        &self.buffer
    }

    pub(crate) fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// Discard any previous contents and reposition to the origin.
    pub(crate) fn start(&mut self) -> Output<'_> {
        self.buffer.clear();
        self.redraw(Redraw::MoveToCursor)
    }

    /// Advance by one input byte.
    pub(crate) fn advance(&mut self, byte: u8) -> Output<'_> {
        let redraw = match self.decoder.advance(byte) {
            Some(event) => self.dispatch(event),
            None => Redraw::Nothing,
        };

        self.redraw(redraw)
    }

    /// End of input. A key sequence cut short reads as the escape key,
    /// cancelling the session; otherwise nothing happens and the
    /// caller decides.
    pub(crate) fn interrupt(&mut self) -> Output<'_> {
        let redraw = match self.decoder.interrupt() {
            Some(event) => self.dispatch(event),
            None => Redraw::Nothing,
        };

        self.redraw(redraw)
    }

    fn dispatch(&mut self, event: KeyEvent) -> Redraw {
        match event {
            KeyEvent::Char(byte) => {
                if self.accept.contains(byte) {
                    let from = self.buffer.cursor();

                    if self.buffer.insert(byte) {
                        return Redraw::RepaintTail { from };
                    }
                }

                Redraw::Nothing
            }
            KeyEvent::Backspace => {
                if self.buffer.backspace() {
                    Redraw::StepLeftRepaintTail {
                        from: self.buffer.cursor(),
                    }
                } else {
                    Redraw::Nothing
                }
            }
            KeyEvent::Delete => {
                if self.buffer.delete_forward() {
                    Redraw::RepaintTail {
                        from: self.buffer.cursor(),
                    }
                } else {
                    Redraw::Nothing
                }
            }
            KeyEvent::ArrowLeft => {
                if self.buffer.move_left() {
                    Redraw::StepLeft
                } else {
                    Redraw::Nothing
                }
            }
            KeyEvent::ArrowRight => {
                if self.buffer.move_right() {
                    Redraw::StepRight
                } else {
                    Redraw::Nothing
                }
            }
            KeyEvent::Home => {
                self.buffer.move_home();
                Redraw::MoveToCursor
            }
            KeyEvent::End => {
                self.buffer.move_end();
                Redraw::MoveToCursor
            }
            KeyEvent::Enter => Redraw::Done,
            KeyEvent::Escape => {
                // Cancellation discards whatever was typed.
                self.buffer.clear();
                Redraw::Cancelled
            }
            KeyEvent::Unrecognized => Redraw::Nothing,
        }
    }

    fn redraw(&self, redraw: Redraw) -> Output<'_> {
        Output::new(redraw, &self.buffer, self.origin)
    }
}
