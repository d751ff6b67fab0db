//! Length-prefixed string encoding and decoding.
//!
//! Strings travel as a 4-byte signed little-endian character count followed
//! by one byte per character. No charset validation is performed: each byte
//! read widens to one code point, and each character written truncates to
//! its low byte. Text restricted to `U+0000..=U+00FF` round-trips exactly.

use crate::error::{CodecError, CodecResult};
use crate::source::ByteSource;

/// Maximum accepted string length in characters.
///
/// A length prefix above this is treated as corrupt input rather than an
/// allocation request.
pub const MAX_STRING_LEN: usize = 64 * 1024;

/// Decodes a length-prefixed string from `src`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] if the length prefix is negative or
/// exceeds [`MAX_STRING_LEN`], and [`CodecError::StreamExhausted`] if the
/// source ends before the final character.
pub fn read_string<S: ByteSource + ?Sized>(src: &mut S) -> CodecResult<String> {
    let length = src.read_i32()?;
    if length < 0 {
        return Err(CodecError::InvalidLength {
            length: i64::from(length),
        });
    }
    let length = length as usize;
    if length > MAX_STRING_LEN {
        return Err(CodecError::InvalidLength {
            length: length as i64,
        });
    }

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(src.read_char()?);
    }
    Ok(out)
}

/// Encodes `value` as a length prefix followed by one byte per character.
///
/// Characters above `U+00FF` are truncated to their low byte.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] if the character count does not fit
/// in a signed 32-bit prefix.
pub fn write_string(value: &str, out: &mut Vec<u8>) -> CodecResult<()> {
    let count = value.chars().count();
    let Ok(length) = i32::try_from(count) else {
        return Err(CodecError::InvalidLength {
            length: i64::try_from(count).unwrap_or(i64::MAX),
        });
    };

    out.extend_from_slice(&length.to_le_bytes());
    for ch in value.chars() {
        out.push(ch as u8);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ByteReader;

    #[test]
    fn encode_hi() {
        let mut out = Vec::new();
        write_string("hi", &mut out).unwrap();
        assert_eq!(out, [0x02, 0x00, 0x00, 0x00, 0x68, 0x69]);
    }

    #[test]
    fn decode_hi() {
        let mut reader = ByteReader::new(&[0x02, 0x00, 0x00, 0x00, 0x68, 0x69]);
        assert_eq!(read_string(&mut reader).unwrap(), "hi");
        assert!(reader.is_empty());
    }

    #[test]
    fn empty_string_is_length_prefix_only() {
        let mut out = Vec::new();
        write_string("", &mut out).unwrap();
        assert_eq!(out, [0x00, 0x00, 0x00, 0x00]);

        let mut reader = ByteReader::new(&out);
        assert_eq!(read_string(&mut reader).unwrap(), "");
    }

    #[test]
    fn latin1_text_roundtrips() {
        let text = "caf\u{E9}";
        let mut out = Vec::new();
        write_string(text, &mut out).unwrap();
        assert_eq!(out.len(), 4 + 4);

        let mut reader = ByteReader::new(&out);
        assert_eq!(read_string(&mut reader).unwrap(), text);
    }

    #[test]
    fn wide_characters_truncate_to_low_byte() {
        // U+0394 (Greek capital delta) truncates to 0x94.
        let mut out = Vec::new();
        write_string("\u{394}", &mut out).unwrap();
        assert_eq!(out, [0x01, 0x00, 0x00, 0x00, 0x94]);
    }

    #[test]
    fn negative_length_is_rejected() {
        let data = (-5i32).to_le_bytes();
        let mut reader = ByteReader::new(&data);
        let err = read_string(&mut reader).unwrap_err();
        assert_eq!(err, CodecError::InvalidLength { length: -5 });
    }

    #[test]
    fn oversized_length_is_rejected() {
        let prefix = (MAX_STRING_LEN as i32 + 1).to_le_bytes();
        let mut reader = ByteReader::new(&prefix);
        let err = read_string(&mut reader).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { .. }));
    }

    #[test]
    fn max_length_passes_the_cap_check() {
        // Length exactly at the cap fails on missing bytes, not the cap.
        let prefix = (MAX_STRING_LEN as i32).to_le_bytes();
        let mut reader = ByteReader::new(&prefix);
        let err = read_string(&mut reader).unwrap_err();
        assert!(matches!(err, CodecError::StreamExhausted { .. }));
    }

    #[test]
    fn truncated_body_is_exhausted_not_padded() {
        // Length says 3, only 2 character bytes follow.
        let mut reader = ByteReader::new(&[0x03, 0x00, 0x00, 0x00, 0x61, 0x62]);
        let err = read_string(&mut reader).unwrap_err();
        assert!(matches!(err, CodecError::StreamExhausted { .. }));
    }
}
