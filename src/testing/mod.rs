//! Host-side test doubles for the hardware traits

use crate::drivers::{CarrierTimer, LowPower};
use crate::protocol::Symbol;
use core::convert::Infallible;

/// Room for two full presses (65 symbols each)
pub const RECORD_CAPACITY: usize = 160;

/// Carrier timer that records the mark/space stream instead of driving a pin.
///
/// Every overflow is credited to the mark or space of the current symbol,
/// depending on whether the carrier is active at that moment.
pub struct RecordingCarrier {
    symbols: [Symbol; RECORD_CAPACITY],
    len: usize,
    truncated: bool,
    active: bool,
    configured: bool,
    restarts: u32,
    overflows: u32,
    active_periods: u32,
    polls: u32,
    stall: u8,
    pending: u8,
}

impl RecordingCarrier {
    pub const fn new() -> Self {
        Self::with_stall(0)
    }

    /// Every overflow is preceded by `stall` polls that report `WouldBlock`
    pub const fn with_stall(stall: u8) -> Self {
        Self {
            symbols: [Symbol::new(0, 0); RECORD_CAPACITY],
            len: 0,
            truncated: false,
            active: false,
            configured: false,
            restarts: 0,
            overflows: 0,
            active_periods: 0,
            polls: 0,
            stall,
            pending: stall,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols[..self.len]
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    /// Carrier periods elapsed in total
    pub fn overflows(&self) -> u32 {
        self.overflows
    }

    /// Carrier periods elapsed with the carrier on
    pub fn active_periods(&self) -> u32 {
        self.active_periods
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
        self.overflows = 0;
        self.active_periods = 0;
        self.polls = 0;
    }

    fn begin_symbol(&mut self) {
        if self.len == RECORD_CAPACITY {
            self.truncated = true;
            return;
        }
        self.symbols[self.len] = Symbol::new(0, 0);
        self.len += 1;
    }
}

impl Default for RecordingCarrier {
    fn default() -> Self {
        Self::new()
    }
}

impl CarrierTimer for RecordingCarrier {
    fn configure(&mut self) {
        self.configured = true;
        self.active = false;
    }

    fn set_active(&mut self, active: bool) {
        // A mark always opens a symbol; switching off while already idle
        // opens a mark-less one (a plain delay)
        if active || !self.active {
            self.begin_symbol();
        }
        self.active = active;
    }

    fn restart(&mut self) {
        self.restarts += 1;
        self.pending = self.stall;
    }

    fn try_wait_overflow(&mut self) -> nb::Result<(), Infallible> {
        self.polls += 1;
        if self.pending > 0 {
            self.pending -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.pending = self.stall;

        if self.len == 0 {
            self.begin_symbol();
        }
        self.overflows += 1;
        if self.truncated {
            return Ok(());
        }
        let current = &mut self.symbols[self.len - 1];
        if self.active {
            current.on += 1;
            self.active_periods += 1;
        } else {
            current.off += 1;
        }
        Ok(())
    }
}

/// Sleep that returns immediately and counts how often it was entered
#[derive(Debug, Default)]
pub struct CountingSleep {
    wakes: u32,
}

impl CountingSleep {
    pub const fn new() -> Self {
        Self { wakes: 0 }
    }

    pub fn wakes(&self) -> u32 {
        self.wakes
    }
}

impl LowPower for CountingSleep {
    fn sleep_until_wake(&mut self) {
        self.wakes += 1;
    }
}

/// `ufmt` sink collecting log output on the host
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Capture(pub String);

#[cfg(test)]
impl ufmt::uWrite for Capture {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}
