//! 40kHz carrier on OC0B (PB1) from Timer/Counter0

use super::gpio::board::IrOut;
use crate::config::{CARRIER_MATCH, CARRIER_TOP};
use crate::drivers::CarrierTimer;
use avr_device::attiny85::{tc0, TC0};
use core::convert::Infallible;

// TCCR0A: inverted output on OC0B (COM0B1:0 = 11), WGM01:0 = 11
const TCCR0A_CARRIER: u8 = (3 << 4) | (3 << 0);
// TCCR0B: WGM02 = 1 (fast PWM, TOP = OCR0A), CS0 = 001 (clk/1)
const TCCR0B_CARRIER: u8 = (1 << 3) | (1 << 0);
const TOV0: u8 = 1 << 1;

/// Timer0 in fast PWM mode with TOP = 24, so it overflows every 25 CPU
/// cycles (25us at 1MHz). The carrier keeps running in hardware while the
/// CPU polls the overflow flag.
pub struct Tc0Carrier {
    tc0: TC0,
    _pin: IrOut,
}

impl Tc0Carrier {
    pub fn new(tc0: TC0, pin: IrOut) -> Self {
        Self { tc0, _pin: pin }
    }
}

impl CarrierTimer for Tc0Carrier {
    fn configure(&mut self) {
        unsafe {
            self.tc0.tccr0a.write(|w| w.bits(TCCR0A_CARRIER));
            self.tc0.tccr0b.write(|w| w.bits(TCCR0B_CARRIER));
            self.tc0.ocr0a.write(|w| w.bits(CARRIER_TOP));
            // OCR0B == OCR0A keeps the output low
            self.tc0.ocr0b.write(|w| w.bits(CARRIER_TOP));
        }
    }

    #[inline]
    fn set_active(&mut self, active: bool) {
        let compare = if active { CARRIER_MATCH } else { CARRIER_TOP };
        unsafe {
            self.tc0.ocr0b.write(|w| w.bits(compare));
        }
    }

    fn restart(&mut self) {
        unsafe {
            self.tc0.tcnt0.write(|w| w.bits(0));
            self.tc0.tifr.write(|w| w.bits(TOV0));
        }
    }

    #[inline]
    fn try_wait_overflow(&mut self) -> nb::Result<(), Infallible> {
        poll_overflow(&self.tc0)
    }
}

/// Takes the TOV0 flag if set. Writing a one clears it; the other flags in
/// TIFR are left alone because zeros are ignored.
#[inline]
pub(crate) fn poll_overflow(tc0: &tc0::RegisterBlock) -> nb::Result<(), Infallible> {
    if tc0.tifr.read().bits() & TOV0 == 0 {
        return Err(nb::Error::WouldBlock);
    }
    unsafe {
        tc0.tifr.write(|w| w.bits(TOV0));
    }
    Ok(())
}
