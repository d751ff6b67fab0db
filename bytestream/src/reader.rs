//! Byte readers over borrowed slices and blocking streams.

use std::io::{self, Read};

use crate::error::{CodecError, CodecResult};
use crate::source::ByteSource;

/// A reader decoding values from a borrowed byte slice.
///
/// All reads are bounds-checked and return errors on short input.
/// The reader never panics on malformed data.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl ByteSource for ByteReader<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> CodecResult<()> {
        let available = self.remaining();
        if buf.len() > available {
            return Err(CodecError::StreamExhausted {
                requested: buf.len(),
                available,
            });
        }
        let end = self.pos + buf.len();
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(())
    }
}

/// Scratch capacity for staged stream reads.
const SCRATCH_LEN: usize = 32;

/// A reader decoding values from a blocking [`Read`] stream.
///
/// Reads are staged through a fixed scratch buffer; no bytes are buffered
/// across calls, so the stream position always reflects exactly the values
/// decoded so far. Pass `&mut stream` to keep ownership of the stream.
///
/// All timeout and backpressure behavior is the stream's concern; every
/// read here blocks until the requested bytes arrive or the stream fails.
#[derive(Debug)]
pub struct StreamReader<R> {
    stream: R,
    scratch: [u8; SCRATCH_LEN],
}

impl<R: Read> StreamReader<R> {
    /// Creates a new `StreamReader` over the given stream.
    #[must_use]
    pub const fn new(stream: R) -> Self {
        Self {
            stream,
            scratch: [0u8; SCRATCH_LEN],
        }
    }

    /// Consumes the reader and returns the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.stream
    }
}

impl<R: Read> ByteSource for StreamReader<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> CodecResult<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let want = (buf.len() - filled).min(SCRATCH_LEN);
            let got = match self.stream.read(&mut self.scratch[..want]) {
                Ok(0) => {
                    return Err(CodecError::StreamExhausted {
                        requested: buf.len(),
                        available: filled,
                    });
                }
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(CodecError::Io { kind: err.kind() }),
            };
            buf[filled..filled + got].copy_from_slice(&self.scratch[..got]);
            filled += got;
        }
        Ok(())
    }
}
