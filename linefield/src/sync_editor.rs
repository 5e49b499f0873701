//! Field editor for synchronous IO.
//!
//! The editor runs the core state machine over a blocking
//! [`IO`] wrapper: read one byte, apply it, write the redraw, repeat
//! until Enter or Escape.
//!
//! Use [`crate::builder::EditorBuilder`] to build an editor.

use crate::core::{Field, SessionEnd, Submission};
use crate::error::LinefieldError;
use crate::field_buffer::Buffer;
use crate::input::KeyDecoder;
use crate::output::{Output, OutputItem};
use crate::sync_io::IO;

/// Field editor for synchronous IO
pub struct Editor<B, D>
where
    B: Buffer,
    D: KeyDecoder,
{
    field: Field<B, D>,
}

impl<B, D> Editor<B, D>
where
    B: Buffer,
    D: KeyDecoder,
{
    pub(crate) fn new(field: Field<B, D>) -> Self {
        Self { field }
    }

    fn handle_output<R: embedded_io::Read, W: embedded_io::Write>(
        output: Output<'_>,
        io: &mut IO<R, W>,
    ) -> Result<Option<SessionEnd>, LinefieldError> {
        for item in output {
            if let Some(bytes) = item.get_bytes() {
                io.write(bytes)?;
            }

            io.flush()?;

            match item {
                OutputItem::Done => return Ok(Some(SessionEnd::Entered)),
                OutputItem::Cancelled => return Ok(Some(SessionEnd::Cancelled)),
                _ => (),
            }
        }

        Ok(None)
    }

    /// Run one editing session.
    ///
    /// Repositions to the field's origin, then reads keys until Enter
    /// or Escape. The terminal is expected to be in raw mode for the
    /// whole call. End of input with a pending key sequence counts as
    /// Escape; end of input at rest is [`LinefieldError::Aborted`].
    pub fn edit<R: embedded_io::Read, W: embedded_io::Write>(
        &mut self,
        io: &mut IO<R, W>,
    ) -> Result<Submission<'_>, LinefieldError> {
        Self::handle_output(self.field.start(), io)?;

        let end = loop {
            let mut buf = [0u8; 1];
            let len = io.read(&mut buf)?;

            if len == 1 {
                if let Some(end) = Self::handle_output(self.field.advance(buf[0]), io)? {
                    break end;
                }
            } else if let Some(end) = Self::handle_output(self.field.interrupt(), io)? {
                break end;
            } else {
                return Err(LinefieldError::Aborted);
            }
        };

        Ok(match end {
            SessionEnd::Entered => Submission::Entered(self.field.as_str()),
            SessionEnd::Cancelled => Submission::Cancelled,
        })
    }
}

#[cfg(feature = "std")]
pub mod with_std {
    //! Convenience entry point on stdin/stdout. Requires feature `std`.

    use super::*;
    use crate::builder::EditorBuilder;
    use std::string::{String, ToString};

    /// Run a single editing session on stdin/stdout and return an
    /// owned copy of the result.
    ///
    /// The field starts at the zero-based `(row, column)`, holds at
    /// most `capacity` characters and accepts the inclusive character
    /// range `low..=high`. The terminal must already be in raw mode.
    /// An empty string means the session was cancelled or the field
    /// was submitted empty.
    pub fn edit_at(
        row: usize,
        column: usize,
        capacity: usize,
        low: u8,
        high: u8,
    ) -> Result<String, LinefieldError> {
        let mut io = IO::default();

        let mut editor = EditorBuilder::with_capacity(capacity)
            .at(row, column)
            .accept(low, high)
            .build_sync();

        Ok(editor.edit(&mut io)?.as_str().to_string())
    }
}
