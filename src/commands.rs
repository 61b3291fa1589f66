use crate::utils::{CommandWriter, ToPayload};
//# Naming conventions follow the ZFM/R30x series datasheet shared by the
//# AS608 and R307 modules (the same command set the R502 speaks).

/// Enum for commands one can send to the module. Names match the datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Performs a handshake with the device to verify the password.
    /// The default password on these modules is 0x00000000.
    VfyPwd {
        /// The device password.
        password: u32,
    },

    /// Reads system status and basic configuration
    ReadSysPara,

    /// Reads the number of templates currently enrolled in the library
    TemplateNum,

    /// Captures an image of the fingerprint
    GenImg,

    /// Processes an image into a _character buffer_
    Img2Tz {
        /// Which buffer to store the processed fingerprint data into (there are 2).
        ///
        /// **Note:** The buffers are named **1** and **2**. Any other value defaults to 2.
        buffer: u8,
    },

    /// Combines the two character buffers into a storable template
    RegModel,

    /// Writes the template held in a character buffer to a library location
    Store {
        /// Which character buffer to store from.
        buffer: u8,

        /// The library location to write to.
        index: u16,
    },

    /// Reads a stored template back into a character buffer
    LoadChar {
        /// Which character buffer to load into.
        buffer: u8,

        /// The library location to read from.
        index: u16,
    },

    /// Deletes a contiguous run of stored templates
    DeletChar {
        /// First library location to delete.
        start_index: u16,

        /// How many consecutive locations to delete.
        count: u16,
    },

    /// Clears the entire template library
    Empty,

    /// Matches the captured fingerprint against a number of stored templates.
    Search {
        /// Which buffer holds the processed fingerprint data (there are 2).
        buffer: u8,

        /// The start index - from which index onwards the search goes
        start_index: u16,

        /// The number of locations to search from the start index
        end_index: u16,
    },

    /// Same as [`Search`](Command::Search) but using the module's
    /// high-speed search path.
    HighSpeedSearch {
        /// Which buffer holds the processed fingerprint data (there are 2).
        buffer: u8,

        /// The start index - from which index onwards the search goes
        start_index: u16,

        /// The number of locations to search from the start index
        end_index: u16,
    },
}

impl Command {
    /// Total length in bytes of the acknowledgement packet this command
    /// produces, header and checksum included.
    pub fn reply_length(&self) -> usize {
        match self {
            Self::ReadSysPara => 28,
            Self::TemplateNum => 14,
            Self::Search { .. } | Self::HighSpeedSearch { .. } => 16,
            _ => 12,
        }
    }
}

impl ToPayload for Command {
    fn to_payload(&self, writer: &mut dyn CommandWriter) {
        match self {
            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x07 [2]
            // instr  | 0x13 [1]
            // passwd | cmd.password [4]
            // chksum | checksum [2]
            Self::VfyPwd { password } => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x07]);
                writer.write_cmd_bytes(&[0x13]);
                writer.write_cmd_bytes(&password.to_be_bytes()[..]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x03 [2]
            // instr  | 0x0F [1]
            // chksum | checksum [2]
            Self::ReadSysPara => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x03]);
                writer.write_cmd_bytes(&[0x0F]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x03 [2]
            // instr  | 0x1D [1]
            // chksum | checksum [2]
            Self::TemplateNum => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x03]);
                writer.write_cmd_bytes(&[0x1D]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x03 [2]
            // instr  | 0x01 [1]
            // chksum | checksum [2]
            Self::GenImg => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x03]);
                writer.write_cmd_bytes(&[0x01]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x04 [2]
            // instr  | 0x02 [1]
            // bufid  | buffer [1]
            // chksum | checksum [2]
            Self::Img2Tz { buffer } => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x04]);
                writer.write_cmd_bytes(&[0x02]);
                writer.write_cmd_bytes(&[*buffer]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x03 [2]
            // instr  | 0x05 [1]
            // chksum | checksum [2]
            Self::RegModel => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x03]);
                writer.write_cmd_bytes(&[0x05]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x06 [2]
            // instr  | 0x06 [1]
            // bufid  | buffer [1]
            // pageid | index [2]
            // chksum | checksum [2]
            Self::Store { buffer, index } => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x06]);
                writer.write_cmd_bytes(&[0x06]);
                writer.write_cmd_bytes(&[*buffer]);
                writer.write_cmd_bytes(&index.to_be_bytes()[..]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x06 [2]
            // instr  | 0x07 [1]
            // bufid  | buffer [1]
            // pageid | index [2]
            // chksum | checksum [2]
            Self::LoadChar { buffer, index } => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x06]);
                writer.write_cmd_bytes(&[0x07]);
                writer.write_cmd_bytes(&[*buffer]);
                writer.write_cmd_bytes(&index.to_be_bytes()[..]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x07 [2]
            // instr  | 0x0C [1]
            // pageid | start_index [2]
            // count  | count [2]
            // chksum | checksum [2]
            Self::DeletChar { start_index, count } => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x07]);
                writer.write_cmd_bytes(&[0x0C]);
                writer.write_cmd_bytes(&start_index.to_be_bytes()[..]);
                writer.write_cmd_bytes(&count.to_be_bytes()[..]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x03 [2]
            // instr  | 0x0D [1]
            // chksum | checksum [2]
            Self::Empty => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x03]);
                writer.write_cmd_bytes(&[0x0D]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x08 [2]
            // instr  | 0x04 [1]
            // bufid  | buffer [1]
            // sstart | start_index [2]
            // send   | end_index [2]
            // chksum | checksum [2]
            Self::Search {
                buffer,
                start_index,
                end_index,
            } => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x08]);
                writer.write_cmd_bytes(&[0x04]);
                writer.write_cmd_bytes(&[*buffer]);
                writer.write_cmd_bytes(&start_index.to_be_bytes()[..]);
                writer.write_cmd_bytes(&end_index.to_be_bytes()[..]);
            }

            // Required packet:
            // headr  | 0xEF 0x01 [2]
            // addr   | cmd.address [4]
            // ident  | 0x01 [1]
            // length | 0x00 0x08 [2]
            // instr  | 0x1B [1]
            // bufid  | buffer [1]
            // sstart | start_index [2]
            // send   | end_index [2]
            // chksum | checksum [2]
            Self::HighSpeedSearch {
                buffer,
                start_index,
                end_index,
            } => {
                writer.write_cmd_bytes(&[0x01]);
                writer.write_cmd_bytes(&[0x00, 0x08]);
                writer.write_cmd_bytes(&[0x1B]);
                writer.write_cmd_bytes(&[*buffer]);
                writer.write_cmd_bytes(&start_index.to_be_bytes()[..]);
                writer.write_cmd_bytes(&end_index.to_be_bytes()[..]);
            }
        }
    }
}
