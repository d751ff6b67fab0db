//! Single-byte packet tags framing the render-test protocol.

/// Connection request accepted.
///
/// The server has set up the player structure and now expects the client's
/// details (UDP address, name). The gap also gives the client time to
/// precache.
pub const CONNECTION_ACK: u8 = 0;

/// End of a TCP message.
pub const END_OF_MESSAGE: u8 = 255;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_distinct() {
        assert_ne!(CONNECTION_ACK, END_OF_MESSAGE);
    }

    #[test]
    fn tag_values_are_fixed() {
        // Wire values; must never change.
        assert_eq!(CONNECTION_ACK, 0);
        assert_eq!(END_OF_MESSAGE, 255);
    }
}
