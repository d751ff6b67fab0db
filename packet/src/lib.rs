//! Packet tags and message dispatch for the boxwire render-test protocol.
//!
//! A message is a run of tagged packets terminated by an end-of-message
//! sentinel byte. This crate owns the tag constants and the dispatch loop;
//! packet bodies are decoded by the handler using the `bytestream` codec.
//! It knows nothing about transport or simulation state.
//!
//! # Example
//!
//! ```
//! use bytestream::ByteReader;
//! use packet::{read_message, CONNECTION_ACK, END_OF_MESSAGE};
//!
//! let bytes = [CONNECTION_ACK, END_OF_MESSAGE];
//! let mut reader = ByteReader::new(&bytes);
//!
//! let handled = read_message(&mut reader, |tag, _source| {
//!     assert_eq!(tag, CONNECTION_ACK);
//!     Ok(true)
//! })
//! .unwrap();
//! assert_eq!(handled, 1);
//! ```

mod message;
mod tags;

pub use message::read_message;
pub use tags::{CONNECTION_ACK, END_OF_MESSAGE};

#[cfg(test)]
mod tests {
    use super::*;
    use bytestream::{ByteReader, ByteSource, ByteWriter};

    #[test]
    fn public_api_exports() {
        let _ = CONNECTION_ACK;
        let _ = END_OF_MESSAGE;
    }

    #[test]
    fn string_payloads_flow_through_dispatch() {
        let mut writer = ByteWriter::new();
        writer.write_u8(CONNECTION_ACK);
        writer.write_string("player one").unwrap();
        writer.write_u8(END_OF_MESSAGE);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let mut name = String::new();
        read_message(&mut reader, |_tag, source| {
            name = source.read_string()?;
            Ok(true)
        })
        .unwrap();

        assert_eq!(name, "player one");
    }
}
