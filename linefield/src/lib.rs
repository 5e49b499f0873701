//! Linefield is an IO-agnostic `#[no_std]` editor for single-line
//! input fields on character terminals. The field sits at a fixed
//! screen position with a fixed capacity, and every edit repaints
//! only the part of the line it touched.
//!
//! Features:
//! - IO-free core
//! - Minimal dependencies
//! - No allocation needed: static, borrowed and (with `std`) heap
//!   buffers are provided
//! - In-place redraws, no full-screen repaints
//! - Interchangeable key decoders for escape-sequence and
//!   console-style input, sharing the same engine
//!
//! The core implementation is a state machine taking bytes as input
//! and yielding iterators over byte slices. Because this is done
//! without any IO, it can be driven from blocking reads, async reads
//! or a test harness alike.
//!
//! Two editors wrap the core:
//! - [`sync_editor::Editor`] for the [`embedded_io`] traits, with
//!   stdin/stdout wrappers in [`sync_io`] behind the `std` feature
//! - [`async_editor::Editor`] for the [`embedded_io_async`] traits
//!
//! Editors are built with [`builder::EditorBuilder`]. The terminal
//! must be in raw mode for the duration of a session; how raw mode is
//! entered and restored is left to the caller, which keeps the core
//! portable.
//!
//! Typing beyond the field's capacity, navigating past its ends and
//! characters outside the accepted range are all silently ignored.
//! Enter submits the field and Escape cancels it, discarding whatever
//! was typed.
//!
//! # Example
//! ```no_run
//! # use embedded_io::{Read, Write, ErrorType};
//! # use core::convert::Infallible;
//! # struct MyIO {}
//! # impl ErrorType for MyIO {
//! #     type Error = Infallible;
//! # }
//! # impl embedded_io::Write for MyIO {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { unimplemented!() }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { unimplemented!() }
//! # }
//! # impl embedded_io::Read for MyIO {
//! #     fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> { unimplemented!() }
//! # }
//! use linefield::{builder::EditorBuilder, sync_io::IO, Submission};
//!
//! let mut io = IO::new(MyIO {}, MyIO {});
//!
//! let mut storage = [0; 25];
//! let mut editor = EditorBuilder::from_slice(&mut storage)
//!     .at(10, 45)
//!     .accept(b'a', b'z')
//!     .build_sync();
//!
//! match editor.edit(&mut io).unwrap() {
//!     Submission::Entered(text) => { let _ = text; }
//!     Submission::Cancelled => {}
//! }
//! ```

#![no_std]

#[cfg(any(test, doc, feature = "std"))]
#[macro_use]
extern crate std;

pub mod async_editor;
pub mod async_io;
pub mod builder;
mod core;
pub mod error;
pub mod field_buffer;
pub mod input;
mod output;
pub mod sync_editor;
pub mod sync_io;
pub mod terminal;

pub use crate::core::Submission;

#[cfg(test)]
pub(crate) mod testlib;
