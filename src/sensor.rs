use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::{Read, Write};

use crate::commands::Command;
use crate::driver::{Fpm, DEFAULT_ADDRESS, DEFAULT_PASSWORD};
use crate::responses::{status, MatchResult, Reply, SystemParameters};
use crate::utils::Error;

/// Template capacity of the AS608 variant.
pub const AS608_CAPACITY: u16 = 162;

/// Template capacity of the R307 variant.
pub const R307_CAPACITY: u16 = 1000;

/// How long the module needs after power-up before it answers commands.
pub const STARTUP_DELAY_MS: u16 = 1000;

/// The hardware variant detected behind the adapter.
///
/// The AS608 and R307 speak the same command set and differ, as far as a host
/// can observe, only in template library size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorModel {
    As608,
    R307,
}

impl SensorModel {
    /// Maximum number of templates this variant can store.
    pub fn capacity(&self) -> u16 {
        match self {
            Self::As608 => AS608_CAPACITY,
            Self::R307 => R307_CAPACITY,
        }
    }

    /// Human-readable variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::As608 => "AS608 (162 templates)",
            Self::R307 => "R307 (1000 templates)",
        }
    }
}

/// Outcome of a fingerprint search.
///
/// The match fields travel with the status instead of lingering as readable
/// device state, so a hit can never be confused with the result of an earlier
/// search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Raw confirmation code from the module. [`status::NOT_FOUND`] means the
    /// finger is not enrolled.
    pub status: u8,
    /// The best hit; present exactly when `status` is [`status::OK`].
    pub matched: Option<MatchResult>,
}

/// Capability adapter normalizing the AS608 and R307 behind one API.
///
/// Construction does not touch the hardware; [`begin`](Sensor::begin) runs the
/// handshake and detects which variant is attached. Every other method is a
/// pass-through to the module, returning its raw confirmation code.
#[derive(Debug)]
pub struct Sensor<TX, RX> {
    fpm: Fpm<TX, RX>,
    password: u32,
    model: SensorModel,
}

impl<TX, RX> Sensor<TX, RX>
where
    TX: Write<u8>,
    RX: Read<u8>,
{
    /// Binds to a serial channel using the factory-default address and
    /// password. No I/O happens until [`begin`](Sensor::begin).
    pub fn new(tx: TX, rx: RX) -> Self {
        Self::with_credentials(tx, rx, DEFAULT_ADDRESS, DEFAULT_PASSWORD)
    }

    /// Binds to a serial channel with an explicit device address and password.
    pub fn with_credentials(tx: TX, rx: RX, address: u32, password: u32) -> Self {
        Self {
            fpm: Fpm::new(tx, rx, address),
            password,
            model: SensorModel::As608,
        }
    }

    /// Waits for the module to come up, verifies the password and detects the
    /// attached variant. Returns true iff the handshake succeeded.
    ///
    /// Variant detection infers the model from the enrolled-template count: a
    /// count the AS608 cannot hold means the R307's larger library is
    /// attached. If the count query itself fails the previously detected
    /// model is kept (AS608 when `begin` has never succeeded).
    pub fn begin<D: DelayMs<u16>>(&mut self, delay: &mut D) -> bool {
        delay.delay_ms(STARTUP_DELAY_MS);

        if !self.verify_password() {
            return false;
        }

        if let Ok(Reply::TemplateNum(result)) = self.fpm.send_command(Command::TemplateNum) {
            if result.confirmation_code == status::OK {
                self.model = if result.template_count > AS608_CAPACITY {
                    SensorModel::R307
                } else {
                    SensorModel::As608
                };
            }
        }

        true
    }

    /// Re-runs the password handshake. Does not change any adapter state.
    pub fn verify_password(&mut self) -> bool {
        match self.fpm.send_command(Command::VfyPwd {
            password: self.password,
        }) {
            Ok(Reply::VfyPwd(result)) => result.confirmation_code == status::OK,
            _ => false,
        }
    }

    /// Human-readable name of the detected variant. Derived from the cached
    /// capacity, not a hardware query.
    pub fn sensor_name(&self) -> &'static str {
        self.model.name()
    }

    /// The detected variant.
    pub fn model(&self) -> SensorModel {
        self.model
    }

    /// Cached template capacity of the detected variant.
    pub fn max_capacity(&self) -> u16 {
        self.model.capacity()
    }

    /// Queries the module for the number of enrolled templates. Returns 0
    /// whenever the query does not come back OK.
    pub fn template_count(&mut self) -> u16 {
        match self.fpm.send_command(Command::TemplateNum) {
            Ok(Reply::TemplateNum(result)) if result.confirmation_code == status::OK => {
                result.template_count
            }
            _ => 0,
        }
    }

    /// Captures a fingerprint image into the module's image buffer.
    pub fn get_image(&mut self) -> u8 {
        self.forward(Command::GenImg)
    }

    /// Converts the captured image into character file `buffer` (1 or 2).
    pub fn image_to_char(&mut self, buffer: u8) -> u8 {
        self.forward(Command::Img2Tz { buffer })
    }

    /// Combines character buffers 1 and 2 into a template.
    pub fn create_model(&mut self) -> u8 {
        self.forward(Command::RegModel)
    }

    /// Stores the template from character buffer 1 at `location`.
    pub fn store_model(&mut self, location: u16) -> u8 {
        self.forward(Command::Store {
            buffer: 1,
            index: location,
        })
    }

    /// Deletes the template at `location`.
    pub fn delete_model(&mut self, location: u16) -> u8 {
        self.forward(Command::DeletChar {
            start_index: location,
            count: 1,
        })
    }

    /// Clears the whole template library.
    pub fn empty_database(&mut self) -> u8 {
        self.forward(Command::Empty)
    }

    /// Loads the template at `location` into character buffer 1.
    pub fn load_model(&mut self, location: u16) -> u8 {
        self.forward(Command::LoadChar {
            buffer: 1,
            index: location,
        })
    }

    /// Searches the whole library for the print in character buffer 1 using
    /// the module's high-speed search.
    pub fn fast_search(&mut self) -> SearchOutcome {
        let capacity = self.max_capacity();
        self.run_search(Command::HighSpeedSearch {
            buffer: 1,
            start_index: 0,
            end_index: capacity,
        })
    }

    /// Searches the whole library for the print in character file `buffer`
    /// using the standard search.
    pub fn search(&mut self, buffer: u8) -> SearchOutcome {
        let capacity = self.max_capacity();
        self.run_search(Command::Search {
            buffer,
            start_index: 0,
            end_index: capacity,
        })
    }

    /// Asks the module for its own configuration report. `None` if the query
    /// does not come back OK.
    ///
    /// Note this is an explicit probe on demand; [`begin`](Sensor::begin)
    /// detects the variant from the template count instead.
    pub fn system_parameters(&mut self) -> Option<SystemParameters> {
        match self.fpm.send_command(Command::ReadSysPara) {
            Ok(Reply::ReadSysPara(result)) if result.confirmation_code == status::OK => {
                Some(result.system_parameters)
            }
            _ => None,
        }
    }

    fn forward(&mut self, cmd: Command) -> u8 {
        match self.fpm.send_command(cmd) {
            Ok(reply) => reply.confirmation_code(),
            Err(error) => transport_status(error),
        }
    }

    fn run_search(&mut self, cmd: Command) -> SearchOutcome {
        match self.fpm.send_command(cmd) {
            Ok(Reply::Search(result)) => SearchOutcome {
                status: result.confirmation_code,
                matched: if result.confirmation_code == status::OK {
                    Some(MatchResult {
                        finger_id: result.page_id,
                        confidence: result.match_score,
                    })
                } else {
                    None
                },
            },
            Ok(_) => SearchOutcome {
                status: status::BAD_PACKET,
                matched: None,
            },
            Err(error) => SearchOutcome {
                status: transport_status(error),
                matched: None,
            },
        }
    }
}

// Transport failures surface in the module's own status vocabulary so the
// pass-through methods stay raw-status shaped.
fn transport_status(error: Error) -> u8 {
    match error {
        Error::TxFailed | Error::RxFailed => status::TIMEOUT,
        Error::InvalidReply | Error::ChecksumMismatch => status::BAD_PACKET,
    }
}
