//! Build-time configuration for the ATtiny85 shutter remote

use crate::drivers::Button;
use crate::protocol::{Address, Command};

/// CPU frequency in Hz (internal oscillator, CKDIV8 fuse set)
pub const CPU_FREQ_HZ: u32 = 1_000_000;

/// Timer0 TOP value; the counter runs 0..=TOP so one carrier period is TOP + 1 ticks
pub const CARRIER_TOP: u8 = 24;

/// Compare value while the carrier is active, approx 25% mark/space
pub const CARRIER_MATCH: u8 = 18;

/// Carrier frequency in Hz (40kHz)
pub const CARRIER_FREQ_HZ: u32 = CPU_FREQ_HZ / (CARRIER_TOP as u32 + 1);

/// Length of one carrier period in microseconds
pub const CARRIER_PERIOD_US: u32 = 1_000_000 / CARRIER_FREQ_HZ;

/// Sony camera receiver address
pub const DEVICE_ADDRESS: u16 = 0x1E3A;

/// Fire the shutter immediately
pub const SHUTTER_CODE: u8 = 0x2D;

/// Fire the shutter after a two second delay
pub const TWO_SECS_CODE: u8 = 0x37;

/// Start video recording
pub const VIDEO_CODE: u8 = 0x48;

/// Number of times every frame is sent per button press
pub const FRAME_REPEATS: u8 = 3;

/// Bit rate of the diagnostic serial output (`debug` feature)
pub const DEBUG_BAUD: u32 = 2400;

/// Button bindings and target address, handed to the application at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    pub address: Address,
    pub right: Command,
    pub left: Command,
}

impl RemoteConfig {
    /// Right button fires the shutter, left button uses the two second timer
    pub const DEFAULT: Self = Self {
        address: Address::new(DEVICE_ADDRESS),
        right: Command::SHUTTER,
        left: Command::TWO_SECS,
    };

    pub const fn with_binding(self, button: Button, command: Command) -> Self {
        match button {
            Button::Right => Self { right: command, ..self },
            Button::Left => Self { left: command, ..self },
        }
    }

    pub const fn command_for(&self, button: Button) -> Command {
        match button {
            Button::Right => self.right,
            Button::Left => self.left,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
