//! Field editor for async IO.
//!
//! Same loop as [`crate::sync_editor`], driven through
//! [`embedded_io_async`] traits. The core state machine is shared.
//!
//! Use [`crate::builder::EditorBuilder`] to build an editor.

use crate::async_io::IO;
use crate::core::{Field, SessionEnd, Submission};
use crate::error::LinefieldError;
use crate::field_buffer::Buffer;
use crate::input::KeyDecoder;
use crate::output::{Output, OutputItem};

/// Field editor for async IO
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

    async fn handle_output<R: embedded_io_async::Read, W: embedded_io_async::Write>(
        output: Output<'_>,
        io: &mut IO<R, W>,
    ) -> Result<Option<SessionEnd>, LinefieldError> {
        for item in output {
            if let Some(bytes) = item.get_bytes() {
                io.write(bytes).await?;
            }

            io.flush().await?;

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
    /// See [`crate::sync_editor::Editor::edit`] for the contract.
    pub async fn edit<R: embedded_io_async::Read, W: embedded_io_async::Write>(
        &mut self,
        io: &mut IO<R, W>,
    ) -> Result<Submission<'_>, LinefieldError> {
        Self::handle_output(self.field.start(), io).await?;

        let end = loop {
            let mut buf = [0u8; 1];
            let len = io.read(&mut buf).await?;

            if len == 1 {
                if let Some(end) = Self::handle_output(self.field.advance(buf[0]), io).await? {
                    break end;
                }
            } else if let Some(end) = Self::handle_output(self.field.interrupt(), io).await? {
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
