use arrayvec::ArrayVec;
use byteorder::{BigEndian, ByteOrder};
use embedded_hal::serial::{Read, Write};
use nb::block;

use crate::commands::Command;
use crate::responses::{
    DeletCharResult, EmptyResult, GenImgResult, Img2TzResult, LoadCharResult, ReadSysParaResult,
    RegModelResult, Reply, SearchResult, StoreResult, SystemParameters, TemplateNumResult,
    VfyPwdResult,
};
use crate::utils::{CommandWriter, Error, FromPayload, ToPayload};

/// Factory-default device address on AS608 and R307 modules.
pub const DEFAULT_ADDRESS: u32 = 0xFFFF_FFFF;

/// Factory-default handshake password.
pub const DEFAULT_PASSWORD: u32 = 0x0000_0000;

/// Baud rate the modules ship configured for. The serial peripheral handed to
/// [`Fpm::new`] must already be set up at this rate (or whatever the module
/// was reconfigured to).
pub const DEFAULT_BAUD_RATE: u32 = 57_600;

const HEADER: [u8; 2] = [0xEF, 0x01];
const ACK_IDENTIFIER: u8 = 0x07;

/// Represents an AS608/R307-family module connected to a U(S)ART.
#[derive(Debug)]
pub struct Fpm<TX, RX> {
    tx: TX,
    rx: RX,
    address: u32,
    received: ArrayVec<[u8; 64]>,
    cmd_buffer: ArrayVec<[u8; 64]>,
}

impl<TX, RX> Fpm<TX, RX>
where
    TX: Write<u8>,
    RX: Read<u8>,
{
    pub fn new(tx: TX, rx: RX, address: u32) -> Self {
        Self {
            tx,
            rx,
            address,
            received: ArrayVec::new(),
            cmd_buffer: ArrayVec::new(),
        }
    }

    /// Sends a command to the module and then blocks waiting for the
    /// acknowledgement packet.
    pub fn send_command(&mut self, cmd: Command) -> Result<Reply, Error> {
        self.prepare_cmd(&cmd);

        for byte in &self.cmd_buffer {
            block!(self.tx.write(*byte)).map_err(|_| Error::TxFailed)?;
        }
        block!(self.tx.flush()).map_err(|_| Error::TxFailed)?;

        self.received.clear();
        for _ in 0..cmd.reply_length() {
            let byte = block!(self.rx.read()).map_err(|_| Error::RxFailed)?;
            self.received.push(byte);
        }

        self.parse_reply(&cmd)
    }

    fn prepare_cmd(&mut self, cmd: &Command) {
        self.cmd_buffer.clear();
        self.write_cmd_bytes(&HEADER);
        let address = self.address;
        self.write_cmd_bytes(&address.to_be_bytes()[..]);
        cmd.to_payload(self);
        let chk = self.compute_checksum();
        self.write_cmd_bytes(&chk.to_be_bytes()[..]);
    }

    // Checksum covers everything after the address: packet identifier, length
    // and payload.
    fn compute_checksum(&self) -> u16 {
        let mut checksum = 0u16;
        for byte in &self.cmd_buffer[6..] {
            checksum = checksum.wrapping_add(*byte as u16);
        }
        checksum
    }

    fn parse_reply(&self, cmd: &Command) -> Result<Reply, Error> {
        let buf = &self.received[..];
        // Expected packet:
        // headr  | 0xEF 0x01 [2]
        // addr   | device address [4]
        // ident  | 0x07 [1]
        // length | payload length + 2 [2]
        // confrm | confirmation code [1]
        // params | (command specific) [0+]
        // chksum | checksum [2]
        if buf.len() < 12 || buf[0..2] != HEADER || buf[6] != ACK_IDENTIFIER {
            return Err(Error::InvalidReply);
        }

        let mut checksum = 0u16;
        for byte in &buf[6..buf.len() - 2] {
            checksum = checksum.wrapping_add(*byte as u16);
        }
        if checksum != BigEndian::read_u16(&buf[buf.len() - 2..]) {
            return Err(Error::ChecksumMismatch);
        }

        let address = BigEndian::read_u32(&buf[2..6]);
        let confirmation_code = buf[9];
        let checksum = BigEndian::read_u16(&buf[buf.len() - 2..]);

        let reply = match cmd {
            Command::VfyPwd { .. } => Reply::VfyPwd(VfyPwdResult {
                address,
                confirmation_code,
                checksum,
            }),
            Command::ReadSysPara => Reply::ReadSysPara(ReadSysParaResult {
                address,
                confirmation_code,
                system_parameters: SystemParameters::from_payload(&buf[10..26]),
                checksum,
            }),
            Command::TemplateNum => Reply::TemplateNum(TemplateNumResult {
                address,
                confirmation_code,
                template_count: BigEndian::read_u16(&buf[10..12]),
                checksum,
            }),
            Command::GenImg => Reply::GenImg(GenImgResult {
                address,
                confirmation_code,
                checksum,
            }),
            Command::Img2Tz { .. } => Reply::Img2Tz(Img2TzResult {
                address,
                confirmation_code,
                checksum,
            }),
            Command::RegModel => Reply::RegModel(RegModelResult {
                address,
                confirmation_code,
                checksum,
            }),
            Command::Store { .. } => Reply::Store(StoreResult {
                address,
                confirmation_code,
                checksum,
            }),
            Command::LoadChar { .. } => Reply::LoadChar(LoadCharResult {
                address,
                confirmation_code,
                checksum,
            }),
            Command::DeletChar { .. } => Reply::DeletChar(DeletCharResult {
                address,
                confirmation_code,
                checksum,
            }),
            Command::Empty => Reply::Empty(EmptyResult {
                address,
                confirmation_code,
                checksum,
            }),
            Command::Search { .. } | Command::HighSpeedSearch { .. } => {
                Reply::Search(SearchResult {
                    address,
                    confirmation_code,
                    page_id: BigEndian::read_u16(&buf[10..12]),
                    match_score: BigEndian::read_u16(&buf[12..14]),
                    checksum,
                })
            }
        };
        Ok(reply)
    }
}

impl<TX, RX> CommandWriter for Fpm<TX, RX> {
    fn write_cmd_bytes(&mut self, bytes: &[u8]) {
        // The buffer is sized for the largest command in the set.
        let _ = self.cmd_buffer.try_extend_from_slice(bytes);
    }
}

impl FromPayload for SystemParameters {
    fn from_payload(payload: &[u8]) -> SystemParameters {
        // The datasheet is a little inconsistent - sometimes the sizes are
        // given in bytes and sometimes in 16-bit words. Offsets below are in
        // bytes from the start of the parameter block.
        SystemParameters {
            status_register: BigEndian::read_u16(&payload[0..2]),
            system_identifier_code: BigEndian::read_u16(&payload[2..4]),
            finger_library_size: BigEndian::read_u16(&payload[4..6]),
            security_level: BigEndian::read_u16(&payload[6..8]),
            device_address: BigEndian::read_u32(&payload[8..12]),
            packet_size: BigEndian::read_u16(&payload[12..14]),
            baud_setting: BigEndian::read_u16(&payload[14..16]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::status;
    use crate::testutil::{ack_packet, RecordTx, ScriptRx};
    use core::cell::RefCell;

    fn written_bytes() -> RefCell<ArrayVec<[u8; 128]>> {
        RefCell::new(ArrayVec::new())
    }

    #[test]
    fn vfy_pwd_command_is_framed_per_datasheet() {
        let written = written_bytes();
        let mut rx = ScriptRx::new();
        rx.feed(&ack_packet(DEFAULT_ADDRESS, &[status::OK]));
        let mut fpm = Fpm::new(RecordTx(&written), rx, DEFAULT_ADDRESS);

        fpm.send_command(Command::VfyPwd { password: 0x0000_0000 })
            .unwrap();

        assert_eq!(
            &written.borrow()[..],
            &[
                0xEF, 0x01, // header
                0xFF, 0xFF, 0xFF, 0xFF, // address
                0x01, // command packet
                0x00, 0x07, // length
                0x13, // VfyPwd
                0x00, 0x00, 0x00, 0x00, // password
                0x00, 0x1B, // checksum
            ][..]
        );
    }

    #[test]
    fn store_command_carries_buffer_and_index() {
        let written = written_bytes();
        let mut rx = ScriptRx::new();
        rx.feed(&ack_packet(DEFAULT_ADDRESS, &[status::OK]));
        let mut fpm = Fpm::new(RecordTx(&written), rx, DEFAULT_ADDRESS);

        fpm.send_command(Command::Store {
            buffer: 1,
            index: 0x0005,
        })
        .unwrap();

        assert_eq!(
            &written.borrow()[..],
            &[
                0xEF, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x06, 0x06, 0x01, 0x00, 0x05,
                0x00, 0x13,
            ][..]
        );
    }

    #[test]
    fn non_default_address_is_framed_and_echoed() {
        let written = written_bytes();
        let mut rx = ScriptRx::new();
        rx.feed(&ack_packet(0x1234_5678, &[status::OK]));
        let mut fpm = Fpm::new(RecordTx(&written), rx, 0x1234_5678);

        let reply = fpm.send_command(Command::GenImg).unwrap();
        assert_eq!(&written.borrow()[2..6], &[0x12, 0x34, 0x56, 0x78][..]);
        match reply {
            Reply::GenImg(result) => assert_eq!(result.address, 0x1234_5678),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn template_num_ack_yields_count() {
        let written = written_bytes();
        let mut rx = ScriptRx::new();
        rx.feed(&ack_packet(DEFAULT_ADDRESS, &[status::OK, 0x01, 0xF4]));
        let mut fpm = Fpm::new(RecordTx(&written), rx, DEFAULT_ADDRESS);

        match fpm.send_command(Command::TemplateNum).unwrap() {
            Reply::TemplateNum(result) => {
                assert_eq!(result.confirmation_code, status::OK);
                assert_eq!(result.template_count, 500);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn search_ack_yields_page_and_score() {
        let written = written_bytes();
        let mut rx = ScriptRx::new();
        rx.feed(&ack_packet(
            DEFAULT_ADDRESS,
            &[status::OK, 0x00, 0x2A, 0x00, 0x63],
        ));
        let mut fpm = Fpm::new(RecordTx(&written), rx, DEFAULT_ADDRESS);

        match fpm
            .send_command(Command::HighSpeedSearch {
                buffer: 1,
                start_index: 0,
                end_index: 162,
            })
            .unwrap()
        {
            Reply::Search(result) => {
                assert_eq!(result.page_id, 42);
                assert_eq!(result.match_score, 99);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn read_sys_para_ack_yields_parameters() {
        let written = written_bytes();
        let mut rx = ScriptRx::new();
        // status 0x0004 (PWD bit), ident 0x0009, library 1000, security 3,
        // address default, packet size code 2, baud code 6.
        rx.feed(&ack_packet(
            DEFAULT_ADDRESS,
            &[
                status::OK,
                0x00, 0x04,
                0x00, 0x09,
                0x03, 0xE8,
                0x00, 0x03,
                0xFF, 0xFF, 0xFF, 0xFF,
                0x00, 0x02,
                0x00, 0x06,
            ],
        ));
        let mut fpm = Fpm::new(RecordTx(&written), rx, DEFAULT_ADDRESS);

        match fpm.send_command(Command::ReadSysPara).unwrap() {
            Reply::ReadSysPara(result) => {
                let params = result.system_parameters;
                assert!(params.password_ok());
                assert!(!params.busy());
                assert_eq!(params.system_identifier_code, 0x0009);
                assert_eq!(params.finger_library_size, 1000);
                assert_eq!(params.security_level, 3);
                assert_eq!(params.device_address, DEFAULT_ADDRESS);
                assert_eq!(params.packet_size, 2);
                assert_eq!(params.baud_setting, 6);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn corrupt_checksum_is_rejected() {
        let written = written_bytes();
        let mut packet = ack_packet(DEFAULT_ADDRESS, &[status::OK]);
        let last = packet.len() - 1;
        packet[last] ^= 0xFF;
        let mut rx = ScriptRx::new();
        rx.feed(&packet);
        let mut fpm = Fpm::new(RecordTx(&written), rx, DEFAULT_ADDRESS);

        assert_eq!(
            fpm.send_command(Command::GenImg),
            Err(Error::ChecksumMismatch)
        );
    }

    #[test]
    fn wrong_header_is_rejected() {
        let written = written_bytes();
        let mut packet = ack_packet(DEFAULT_ADDRESS, &[status::OK]);
        packet[0] = 0x00;
        let mut rx = ScriptRx::new();
        rx.feed(&packet);
        let mut fpm = Fpm::new(RecordTx(&written), rx, DEFAULT_ADDRESS);

        assert_eq!(fpm.send_command(Command::GenImg), Err(Error::InvalidReply));
    }

    #[test]
    fn exhausted_channel_is_a_read_failure() {
        let written = written_bytes();
        let rx = ScriptRx::new();
        let mut fpm = Fpm::new(RecordTx(&written), rx, DEFAULT_ADDRESS);

        assert_eq!(fpm.send_command(Command::GenImg), Err(Error::RxFailed));
    }
}
