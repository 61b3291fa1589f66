//! Scripted serial stubs for driving the driver and adapter without hardware.

use arrayvec::ArrayVec;
use core::cell::RefCell;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::{Read, Write};

/// Records every byte written, through a shared buffer so tests keep access
/// after handing the writer to the device.
pub struct RecordTx<'a>(pub &'a RefCell<ArrayVec<[u8; 128]>>);

impl Write<u8> for RecordTx<'_> {
    type Error = ();

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        self.0.borrow_mut().push(word);
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        Ok(())
    }
}

/// Replays canned acknowledgement bytes; reads past the script fail like a
/// dead serial line.
pub struct ScriptRx {
    data: ArrayVec<[u8; 128]>,
    pos: usize,
}

impl ScriptRx {
    pub fn new() -> Self {
        Self {
            data: ArrayVec::new(),
            pos: 0,
        }
    }

    /// Appends one reply packet to the script.
    pub fn feed(&mut self, packet: &[u8]) {
        self.data
            .try_extend_from_slice(packet)
            .expect("test script too long");
    }
}

impl Read<u8> for ScriptRx {
    type Error = ();

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        if self.pos >= self.data.len() {
            return Err(nb::Error::Other(()));
        }
        let word = self.data[self.pos];
        self.pos += 1;
        Ok(word)
    }
}

pub struct NoopDelay;

impl DelayMs<u16> for NoopDelay {
    fn delay_ms(&mut self, _ms: u16) {}
}

/// Builds a well-formed acknowledgement packet around `payload` (confirmation
/// code plus any command-specific fields), checksum included.
pub fn ack_packet(address: u32, payload: &[u8]) -> ArrayVec<[u8; 32]> {
    let mut packet = ArrayVec::new();
    packet.try_extend_from_slice(&[0xEF, 0x01]).unwrap();
    packet
        .try_extend_from_slice(&address.to_be_bytes()[..])
        .unwrap();
    packet.push(0x07);
    let length = (payload.len() + 2) as u16;
    packet
        .try_extend_from_slice(&length.to_be_bytes()[..])
        .unwrap();
    packet.try_extend_from_slice(payload).unwrap();

    let mut checksum = 0u16;
    for byte in &packet[6..] {
        checksum = checksum.wrapping_add(*byte as u16);
    }
    packet
        .try_extend_from_slice(&checksum.to_be_bytes()[..])
        .unwrap();
    packet
}
