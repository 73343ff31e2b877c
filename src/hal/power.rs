use super::gpio::board::{BUTTON_LEFT, BUTTON_RIGHT};
use crate::drivers::LowPower;
use avr_device::attiny85::{ADC, CPU, EXINT};

// MCUCR
const SE: u8 = 1 << 5;
const SM_MASK: u8 = 0x18;
// GIMSK
const PCIE: u8 = 1 << 5;
// ADCSRA
const ADEN: u8 = 1 << 7;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum SleepMode {
    Idle = 0,
    AdcNoiseReduction = 1,
    PowerDown = 2,
}

/// Power-down sleep, woken by a pin change on either button
pub struct PowerDown {
    cpu: CPU,
    _exint: EXINT,
}

impl PowerDown {
    /// Switches the ADC off, selects power-down and enables the pin change
    /// interrupt for both button lines.
    pub fn new(cpu: CPU, exint: EXINT, adc: ADC) -> Self {
        unsafe {
            adc.adcsra.modify(|r, w| w.bits(r.bits() & !ADEN));
            exint.pcmsk.modify(|r, w| w.bits(r.bits() | (1 << BUTTON_RIGHT) | (1 << BUTTON_LEFT)));
            exint.gimsk.modify(|r, w| w.bits(r.bits() | PCIE));
        }
        let mut power = Self { cpu, _exint: exint };
        power.set_sleep_mode(SleepMode::PowerDown);
        power
    }

    #[inline]
    pub fn set_sleep_mode(&mut self, mode: SleepMode) {
        unsafe {
            self.cpu
                .mcucr
                .modify(|r, w| w.bits((r.bits() & !SM_MASK) | ((mode as u8) << 3)));
        }
    }

    #[inline]
    fn enable_sleep(&mut self) {
        unsafe {
            self.cpu.mcucr.modify(|r, w| w.bits(r.bits() | SE));
        }
    }

    #[inline]
    fn disable_sleep(&mut self) {
        unsafe {
            self.cpu.mcucr.modify(|r, w| w.bits(r.bits() & !SE));
        }
    }
}

impl LowPower for PowerDown {
    fn sleep_until_wake(&mut self) {
        self.enable_sleep();
        unsafe { avr_device::interrupt::enable() };
        avr_device::asm::sleep();
        self.disable_sleep();
    }
}
