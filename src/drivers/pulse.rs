//! Mark/space pulse generation counted in carrier periods

use super::CarrierTimer;
use crate::protocol::Symbol;

/// Emits timed mark/space pulses by busy-waiting on carrier overflows.
///
/// Nothing here is interrupt driven: every call blocks until the whole pulse
/// has elapsed, and there is no way to cancel one once started.
pub struct PulseSequencer<T> {
    timer: T,
}

impl<T: CarrierTimer> PulseSequencer<T> {
    /// Takes ownership of the timer and configures it for carrier output
    pub fn new(mut timer: T) -> Self {
        timer.configure();
        Self { timer }
    }

    /// `on` periods of carrier followed by `off` periods of silence.
    /// With `on == 0` this is a plain delay and no carrier is produced.
    pub fn pulse(&mut self, on: u16, off: u16) {
        if on > 0 {
            self.timer.set_active(true);
            self.count(on);
        }
        self.timer.set_active(false);
        self.count(off);
    }

    #[inline]
    pub fn emit(&mut self, symbol: Symbol) {
        self.pulse(symbol.on, symbol.off);
    }

    pub fn delay(&mut self, periods: u16) {
        self.pulse(0, periods);
    }

    pub fn restart(&mut self) {
        self.timer.restart();
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn free(self) -> T {
        self.timer
    }

    fn count(&mut self, periods: u16) {
        for _ in 0..periods {
            self.timer.wait_overflow();
        }
    }
}
