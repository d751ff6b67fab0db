//! The byte source capability and the typed reads built on it.

use crate::error::CodecResult;
use crate::strings;

/// A source of raw bytes for decoding.
///
/// Implementors provide [`read_exact`](Self::read_exact); every typed read
/// is defined once on top of it, so slice-backed and stream-backed sources
/// decode identically.
///
/// All multi-byte values are little-endian. Every read consumes exactly the
/// number of bytes the requested type needs; a short source is an error,
/// never a zero-padded value.
pub trait ByteSource {
    /// Reads exactly `buf.len()` bytes into `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::StreamExhausted`](crate::CodecError::StreamExhausted)
    /// if fewer bytes are available than requested.
    fn read_exact(&mut self, buf: &mut [u8]) -> CodecResult<()>;

    /// Reads 1 byte as a boolean. Any nonzero pattern is `true`.
    fn read_bool(&mut self) -> CodecResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads 1 raw byte.
    fn read_u8(&mut self) -> CodecResult<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Reads 1 byte and widens it to a code point. No UTF-8 decoding.
    fn read_char(&mut self) -> CodecResult<char> {
        Ok(char::from(self.read_u8()?))
    }

    /// Reads a little-endian `i16`.
    fn read_i16(&mut self) -> CodecResult<i16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }

    /// Reads a little-endian `u16`.
    fn read_u16(&mut self) -> CodecResult<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Reads a little-endian `i32`.
    fn read_i32(&mut self) -> CodecResult<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Reads a little-endian `u32`.
    fn read_u32(&mut self) -> CodecResult<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Reads a little-endian `i64`.
    fn read_i64(&mut self) -> CodecResult<i64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    /// Reads a little-endian `u64`.
    fn read_u64(&mut self) -> CodecResult<u64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    /// Reads a length-prefixed string.
    ///
    /// See [`strings::read_string`] for the format and failure modes.
    fn read_string(&mut self) -> CodecResult<String> {
        strings::read_string(self)
    }
}
