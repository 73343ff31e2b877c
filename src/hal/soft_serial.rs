//! Transmit-only serial output bit-banged on PB2
//!
//! There is no UART on the ATtiny85. Bit timing reuses the Timer0 overflow
//! (one per carrier period), so it must never run during a pulse.

use super::carrier::poll_overflow;
use super::gpio::board::DebugTx;
use crate::config::{CARRIER_FREQ_HZ, DEBUG_BAUD};
use avr_device::attiny85::TC0;
use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;
use ufmt::uWrite;

// 17 periods per bit gives ~2350 baud, 2% off nominal
const PERIODS_PER_BIT: u32 = (CARRIER_FREQ_HZ + DEBUG_BAUD / 2) / DEBUG_BAUD;

pub struct SoftSerial {
    tx: DebugTx,
}

impl SoftSerial {
    pub fn new(mut tx: DebugTx) -> Self {
        tx.set_high().ok();
        Self { tx }
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.hold(false);
        for bit in 0..8 {
            self.hold(byte & (1 << bit) != 0);
        }
        self.hold(true);
    }

    fn hold(&mut self, high: bool) {
        if high {
            self.tx.set_high().ok();
        } else {
            self.tx.set_low().ok();
        }
        let tc0 = unsafe { &*TC0::ptr() };
        for _ in 0..PERIODS_PER_BIT {
            while poll_overflow(tc0).is_err() {}
        }
    }
}

impl uWrite for SoftSerial {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
