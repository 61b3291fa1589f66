/// Responses to commands returned by the module. Names are the same as commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    VfyPwd(VfyPwdResult),

    /// Contains system status and configuration information
    ReadSysPara(ReadSysParaResult),

    TemplateNum(TemplateNumResult),

    GenImg(GenImgResult),

    Img2Tz(Img2TzResult),

    RegModel(RegModelResult),

    Store(StoreResult),

    LoadChar(LoadCharResult),

    DeletChar(DeletCharResult),

    Empty(EmptyResult),

    /// Produced by both the standard and the high-speed search.
    Search(SearchResult),
}

impl Reply {
    /// The raw confirmation code carried by any acknowledgement packet.
    pub fn confirmation_code(&self) -> u8 {
        match self {
            Self::VfyPwd(r) => r.confirmation_code,
            Self::ReadSysPara(r) => r.confirmation_code,
            Self::TemplateNum(r) => r.confirmation_code,
            Self::GenImg(r) => r.confirmation_code,
            Self::Img2Tz(r) => r.confirmation_code,
            Self::RegModel(r) => r.confirmation_code,
            Self::Store(r) => r.confirmation_code,
            Self::LoadChar(r) => r.confirmation_code,
            Self::DeletChar(r) => r.confirmation_code,
            Self::Empty(r) => r.confirmation_code,
            Self::Search(r) => r.confirmation_code,
        }
    }
}

/// Raw confirmation codes as the module reports them. The module owns this
/// vocabulary; the crate only names the values, it does not wrap them in an
/// error type.
pub mod status {
    pub const OK: u8 = 0x00;
    pub const PACKET_RECEIVE_ERR: u8 = 0x01;
    pub const NO_FINGER: u8 = 0x02;
    pub const IMAGE_FAIL: u8 = 0x03;
    pub const IMAGE_MESS: u8 = 0x06;
    pub const FEATURE_FAIL: u8 = 0x07;
    pub const NO_MATCH: u8 = 0x08;
    pub const NOT_FOUND: u8 = 0x09;
    pub const ENROLL_MISMATCH: u8 = 0x0A;
    pub const BAD_LOCATION: u8 = 0x0B;
    pub const DB_RANGE_FAIL: u8 = 0x0C;
    pub const UPLOAD_FEATURE_FAIL: u8 = 0x0D;
    pub const PACKET_RESPONSE_FAIL: u8 = 0x0E;
    pub const UPLOAD_FAIL: u8 = 0x0F;
    pub const DELETE_FAIL: u8 = 0x10;
    pub const DB_CLEAR_FAIL: u8 = 0x11;
    pub const WRONG_PASSWORD: u8 = 0x13;
    pub const INVALID_IMAGE: u8 = 0x15;
    pub const FLASH_ERR: u8 = 0x18;

    // Host-side sentinels, never sent by the module itself. These are the
    // values the adapter substitutes when the serial transport fails.
    pub const BAD_PACKET: u8 = 0xFE;
    pub const TIMEOUT: u8 = 0xFF;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VfyPwdResult {
    pub address: u32,
    /// 0x00 for a correct password, 0x13 for an incorrect one.
    pub confirmation_code: u8,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadSysParaResult {
    pub address: u32,
    pub confirmation_code: u8,
    pub system_parameters: SystemParameters,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateNumResult {
    pub address: u32,
    pub confirmation_code: u8,
    /// Number of templates currently enrolled. Only meaningful when the
    /// confirmation code is [`status::OK`].
    pub template_count: u16,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenImgResult {
    pub address: u32,
    pub confirmation_code: u8,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Img2TzResult {
    pub address: u32,
    pub confirmation_code: u8,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegModelResult {
    pub address: u32,
    pub confirmation_code: u8,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreResult {
    pub address: u32,
    pub confirmation_code: u8,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadCharResult {
    pub address: u32,
    pub confirmation_code: u8,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletCharResult {
    pub address: u32,
    pub confirmation_code: u8,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResult {
    pub address: u32,
    pub confirmation_code: u8,
    pub checksum: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub address: u32,
    /// [`status::OK`] on a match, [`status::NOT_FOUND`] otherwise.
    pub confirmation_code: u8,
    /// Library location of the best match. Only meaningful when the
    /// confirmation code is [`status::OK`].
    pub page_id: u16,
    /// Match score of the best match. Only meaningful when the confirmation
    /// code is [`status::OK`].
    pub match_score: u16,
    pub checksum: u16,
}

/// A successful search hit: which template matched and how well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Library location of the matched template.
    pub finger_id: u16,
    /// Match confidence as scored by the module.
    pub confidence: u16,
}

/// System status and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemParameters {
    /// Status information. Use instance methods of SystemParameters to get to
    /// individual bits.
    pub status_register: u16,

    /// System identifier code - the datasheet says this has a constant value
    /// of 0x0009
    pub system_identifier_code: u16,

    /// Finger library size as the module reports it.
    pub finger_library_size: u16,

    /// Security level [1-5]
    pub security_level: u16,

    /// Device address, echoed back from the module's configuration.
    pub device_address: u32,

    /// Packet size. Actually a size code [0-3]:\
    /// 0 = 32 bytes\
    /// 1 = 64 bytes\
    /// 2 = 128 bytes (the default)\
    /// 3 = 256 bytes
    pub packet_size: u16,

    /// Baud setting. To get the actual baud value, multiply by 9600.
    /// The default value is 6 for 57,600 baud.
    pub baud_setting: u16,
}

impl SystemParameters {
    /// True if the module is busy executing another command.
    ///
    /// *Busy* in the datasheet.
    pub fn busy(&self) -> bool {
        self.status_register & (1u16 << 0) != 0
    }

    /// True if the module found a matching finger - however you should
    /// always check the response to the actual matching request.
    ///
    /// *Pass* in the datasheet.
    pub fn has_finger_match(&self) -> bool {
        self.status_register & (1u16 << 1) != 0
    }

    /// True if the password given in the handshake is correct.
    ///
    /// *PWD* in the datasheet.
    pub fn password_ok(&self) -> bool {
        self.status_register & (1u16 << 2) != 0
    }

    /// True if the image buffer contains a valid image.
    ///
    /// *ImgBufStat* in the datasheet.
    pub fn has_valid_image(&self) -> bool {
        self.status_register & (1u16 << 3) != 0
    }
}
