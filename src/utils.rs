pub trait FromPayload {
    fn from_payload(payload: &[u8]) -> Self;
}

pub trait CommandWriter {
    fn write_cmd_bytes(&mut self, bytes: &[u8]);
}

pub trait ToPayload {
    fn to_payload(&self, writer: &mut dyn CommandWriter);
}

/// Transport-level failures. Anything the module itself reports comes back
/// as a confirmation code inside a [`Reply`](crate::Reply) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Writing to the serial channel failed.
    TxFailed,
    /// Reading from the serial channel failed before a full reply arrived.
    RxFailed,
    /// The reply did not start with the expected header, address, or
    /// acknowledgement identifier.
    InvalidReply,
    /// The reply arrived intact but its checksum did not add up.
    ChecksumMismatch,
}
