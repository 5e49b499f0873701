//! Builder for editors

use core::marker::PhantomData;

use crate::{
    async_editor,
    core::Field,
    field_buffer::{Buffer, FieldBuffer, NoBuffer, SliceBuffer, StaticBuffer},
    input::{AcceptRange, AnsiDecoder, ConsoleDecoder, KeyDecoder},
    sync_editor,
    terminal::Origin,
};

#[cfg(any(test, doc, feature = "std"))]
use crate::field_buffer::BoundedBuffer;

/// Builder for [`sync_editor::Editor`] and [`async_editor::Editor`].
///
/// Picks the buffer storage, the screen origin, the accepted
/// character range and the key decoder. Escape-sequence input is the
/// default.
///
/// # Example
/// ```
/// use linefield::builder::EditorBuilder;
///
/// let mut storage = [0; 25];
/// let mut editor = EditorBuilder::from_slice(&mut storage)
///     .at(10, 45)
///     .accept(b'a', b'z')
///     .build_sync();
/// ```
pub struct EditorBuilder<B: Buffer, D: KeyDecoder> {
    field_buffer: FieldBuffer<B>,
    origin: Origin,
    accept: AcceptRange,
    _marker: PhantomData<D>,
}

impl EditorBuilder<NoBuffer, AnsiDecoder> {
    /// Create builder for an editor borrowing its storage from the
    /// caller. Capacity is the slice length.
    ///
    /// # Example
    /// ```
    /// use linefield::builder::EditorBuilder;
    ///
    /// let mut storage = [0; 100];
    /// let builder = EditorBuilder::from_slice(&mut storage);
    /// ```
    pub fn from_slice(buffer: &mut [u8]) -> EditorBuilder<SliceBuffer<'_>, AnsiDecoder> {
        EditorBuilder {
            field_buffer: FieldBuffer::from_slice(buffer),
            origin: Origin::new(0, 0),
            accept: AcceptRange::default(),
            _marker: PhantomData,
        }
    }

    /// Create builder for an editor with a static buffer
    ///
    /// # Example
    /// ```
    /// use linefield::builder::EditorBuilder;
    ///
    /// let builder = EditorBuilder::new_static::<100>();
    /// ```
    pub fn new_static<const N: usize>() -> EditorBuilder<StaticBuffer<N>, AnsiDecoder> {
        EditorBuilder {
            field_buffer: FieldBuffer::new_static(),
            origin: Origin::new(0, 0),
            accept: AcceptRange::default(),
            _marker: PhantomData,
        }
    }

    #[cfg(any(test, doc, feature = "std"))]
    /// Create builder for an editor with heap storage of a fixed
    /// capacity. Requires feature `std`.
    pub fn with_capacity(capacity: usize) -> EditorBuilder<BoundedBuffer, AnsiDecoder> {
        EditorBuilder {
            field_buffer: FieldBuffer::with_capacity(capacity),
            origin: Origin::new(0, 0),
            accept: AcceptRange::default(),
            _marker: PhantomData,
        }
    }
}

impl<B: Buffer, D: KeyDecoder> EditorBuilder<B, D> {
    /// Place the field at a zero-based screen coordinate
    pub fn at(mut self, row: usize, column: usize) -> Self {
        self.origin = Origin::new(row, column);
        self
    }

    /// Restrict insertable characters to an inclusive range
    pub fn accept(mut self, low: u8, high: u8) -> Self {
        self.accept = AcceptRange::new(low, high);
        self
    }

    /// Decode input as console extended-key codes instead of escape
    /// sequences
    pub fn with_console_input(self) -> EditorBuilder<B, ConsoleDecoder> {
        EditorBuilder {
            field_buffer: self.field_buffer,
            origin: self.origin,
            accept: self.accept,
            _marker: PhantomData,
        }
    }

    fn build_field(self) -> Field<B, D> {
        Field::new(self.field_buffer, self.origin, self.accept)
    }

    /// Build [`sync_editor::Editor`]
    pub fn build_sync(self) -> sync_editor::Editor<B, D> {
        sync_editor::Editor::new(self.build_field())
    }

    /// Build [`async_editor::Editor`]
    pub fn build_async(self) -> async_editor::Editor<B, D> {
        async_editor::Editor::new(self.build_field())
    }
}
