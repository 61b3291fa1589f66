//! **grow-fpm** is an embedded-hal driver and capability adapter for the GROW AS608 and R307
//! fingerprint modules.
//!
//! The two variants speak the same command set and differ, observably, only in template library
//! size: the AS608 stores 162 templates, the R307 stores 1000. [`Sensor`] hides that difference
//! behind one API - a single startup probe detects which variant is attached, after which image
//! capture, enrollment, storage, search and deletion calls work identically against either,
//! returning the module's raw confirmation codes. The packet transport underneath is exposed as
//! [`Fpm`] for callers that want to speak commands directly.
//!
//! ## Example
//!
//! To detect the attached module:
//! ```
//! # use embedded_hal::serial::{Read, Write};
//! # use embedded_hal::blocking::delay::DelayMs;
//! use grow_fpm::Sensor;
//! # struct TestTx;
//! # struct TestRx(usize);
//! # struct TestDelay;
//! #
//! # impl Write<u8> for TestTx {
//! #     type Error = ();
//! #     fn write(&mut self, _word: u8) -> nb::Result<(), Self::Error> {
//! #         return Ok(());
//! #     }
//! #     fn flush(&mut self) -> nb::Result<(), Self::Error> {
//! #         return Ok(());
//! #     }
//! # }
//! #
//! # // A VfyPwd acknowledgement followed by a TemplateNum acknowledgement
//! # // reporting 7 enrolled templates.
//! # const RES_DATA: &[u8] = &[
//! #     0xef, 0x01, 0xff, 0xff, 0xff, 0xff, 0x07, 0x00, 0x03, 0x00, 0x00, 0x0a,
//! #     0xef, 0x01, 0xff, 0xff, 0xff, 0xff, 0x07, 0x00, 0x05, 0x00, 0x00, 0x07, 0x00, 0x13,
//! # ];
//! #
//! # impl Read<u8> for TestRx {
//! #     type Error = ();
//! #     fn read(&mut self) -> nb::Result<u8, Self::Error> {
//! #         let word = RES_DATA[self.0];
//! #         self.0 += 1;
//! #         return Ok(word);
//! #     }
//! # }
//! #
//! # impl DelayMs<u16> for TestDelay {
//! #     fn delay_ms(&mut self, _ms: u16) {}
//! # }
//! # let rx = TestRx(0);
//! # let tx = TestTx;
//! # let mut delay = TestDelay;
//!
//! // Obtain tx, rx from some serial port implementation configured at
//! // 57,600 baud, and delay from the board's timers.
//! let mut sensor = Sensor::new(tx, rx);
//! if sensor.begin(&mut delay) {
//!     // e.g. "AS608 (162 templates)"
//!     let name = sensor.sensor_name();
//! #     assert_eq!(name, "AS608 (162 templates)");
//! }
//! # assert_eq!(sensor.max_capacity(), 162);
//! ```
//!
//! For host-side programs driving a module over an OS serial port, see the
//! `demos` directory.
#![warn(missing_debug_implementations, rust_2018_idioms)]
#![no_std]

mod commands;
mod driver;
mod responses;
mod sensor;
#[cfg(test)]
mod testutil;
mod utils;

pub use crate::commands::Command;
pub use crate::driver::{Fpm, DEFAULT_ADDRESS, DEFAULT_BAUD_RATE, DEFAULT_PASSWORD};
pub use crate::responses::{
    status, DeletCharResult, EmptyResult, GenImgResult, Img2TzResult, LoadCharResult, MatchResult,
    ReadSysParaResult, RegModelResult, Reply, SearchResult, StoreResult, SystemParameters,
    TemplateNumResult, VfyPwdResult,
};
pub use crate::sensor::{
    SearchOutcome, Sensor, SensorModel, AS608_CAPACITY, R307_CAPACITY, STARTUP_DELAY_MS,
};
pub use crate::utils::Error;
