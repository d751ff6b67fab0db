//! Length-prefixed binary codec for the boxwire render-test protocol.
//!
//! This crate provides [`ByteReader`], [`StreamReader`], and [`ByteWriter`]
//! for decoding and encoding little-endian primitives and length-prefixed
//! strings over a byte stream.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked; a short source
//!   is an error, never a zero-padded value.
//! - **One decode path** - Slice-backed and stream-backed sources share the
//!   typed reads through the [`ByteSource`] trait.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteSource, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u16(0xBEEF);
//! writer.write_string("hi").unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
//! assert_eq!(reader.read_string().unwrap(), "hi");
//! ```

mod error;
mod reader;
mod source;
pub mod strings;
mod writer;

pub use error::{CodecError, CodecResult};
pub use reader::{ByteReader, StreamReader};
pub use source::ByteSource;
pub use strings::MAX_STRING_LEN;
pub use writer::ByteWriter;
