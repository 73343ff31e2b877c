//! Carrier generator interface
//!
//! The carrier comes from a free-running hardware counter; software only
//! switches the compare value between "pulsing" and "held low" and counts
//! counter overflows, one per carrier period.

use core::convert::Infallible;

/// Owned handle to the timer that produces the 40kHz carrier
pub trait CarrierTimer {
    /// Puts the timer into carrier mode with the output held low.
    /// Calling it again leaves the timer in the same state.
    fn configure(&mut self);

    /// Active: pulses at ~25% mark/space. Idle: constant low.
    fn set_active(&mut self, active: bool);

    /// Resets the counter to zero and drops any pending overflow
    fn restart(&mut self);

    /// Consumes one overflow event if one has happened since the last call
    fn try_wait_overflow(&mut self) -> nb::Result<(), Infallible>;

    /// Blocks until the next overflow, i.e. the end of the current carrier period
    fn wait_overflow(&mut self) {
        match nb::block!(self.try_wait_overflow()) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}
