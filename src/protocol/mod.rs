//! Sony SIRC 20-bit infrared protocol
//!
//! Every duration on the wire is a whole number of carrier periods (25us at
//! 40kHz), never an absolute time. A frame is a start symbol followed by 20
//! data bits, least significant bit first:
//!
//! | Symbol   | on | off |
//! |----------|----|-----|
//! | Start    | 96 | 24  |
//! | Bit = 1  | 48 | 24  |
//! | Bit = 0  | 24 | 24  |
//! | Gap      | 0  | 430 |
//!
//! A press sends the frame three times with a gap between repetitions.

pub mod encoder;
pub mod frame;

pub use encoder::SonyEncoder;
pub use frame::{decode, transmission_periods, Frame, Symbol, FRAME_BITS};

use crate::config::{SHUTTER_CODE, TWO_SECS_CODE, VIDEO_CODE};

/// Width of the address field in bits
pub const ADDRESS_BITS: u8 = 13;

/// Width of the command field in bits
pub const COMMAND_BITS: u8 = 7;

/// Receiver address, occupies the upper 13 bits of a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address(u16);

impl Address {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// True if the address fits the 13-bit field without overlapping other bits
    pub const fn fits(self) -> bool {
        self.0 >> ADDRESS_BITS == 0
    }
}

/// Action code, occupies the lower 7 bits of a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command(u8);

impl Command {
    pub const SHUTTER: Self = Self(SHUTTER_CODE);
    pub const TWO_SECS: Self = Self(TWO_SECS_CODE);
    pub const VIDEO: Self = Self(VIDEO_CODE);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn fits(self) -> bool {
        self.0 >> COMMAND_BITS == 0
    }
}
