//! Tag-dispatch loop over a byte source.

use bytestream::{ByteSource, CodecResult};

use crate::tags::END_OF_MESSAGE;

/// Dispatches packets from `source` until the end-of-message tag.
///
/// Each iteration reads one tag byte and hands it to `handler` together
/// with the source, positioned at the packet body; the handler must consume
/// exactly that packet's bytes. Returning `Ok(false)` stops dispatch early.
///
/// Returns the number of packets handled.
///
/// # Errors
///
/// Propagates any decode error from the handler, and
/// [`CodecError::StreamExhausted`](bytestream::CodecError::StreamExhausted)
/// if the source ends before an end-of-message tag.
pub fn read_message<S, F>(source: &mut S, mut handler: F) -> CodecResult<usize>
where
    S: ByteSource,
    F: FnMut(u8, &mut S) -> CodecResult<bool>,
{
    let mut handled = 0;
    loop {
        let tag = source.read_u8()?;
        if tag == END_OF_MESSAGE {
            return Ok(handled);
        }
        let keep_going = handler(tag, source)?;
        handled += 1;
        if !keep_going {
            return Ok(handled);
        }
    }
}
