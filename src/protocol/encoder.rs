//! Drives the pulse sequencer with Sony frames

use super::{Address, Command, Frame, Symbol};
use crate::config::FRAME_REPEATS;
use crate::drivers::{CarrierTimer, PulseSequencer};
use crate::error::{Error, Result};
use embedded_hal::digital::v2::OutputPin;

/// Sends frames through a [`PulseSequencer`] and lights `indicator` while a
/// transmission is in progress.
pub struct SonyEncoder<T, LED> {
    sequencer: PulseSequencer<T>,
    indicator: LED,
}

impl<T, LED> SonyEncoder<T, LED>
where
    T: CarrierTimer,
    LED: OutputPin,
{
    pub fn new(sequencer: PulseSequencer<T>, indicator: LED) -> Self {
        Self {
            sequencer,
            indicator,
        }
    }

    /// Start symbol, then the 20 data bits LSB first. Blocks until the last
    /// bit's space has elapsed.
    pub fn send_frame(&mut self, frame: Frame) {
        // First overflow after the restart is a full period
        self.sequencer.restart();
        for symbol in frame.symbols() {
            self.sequencer.emit(symbol);
        }
    }

    /// Sends the frame for `address`/`command` three times with an 11ms gap
    /// between repetitions. Returns the frame that went out.
    pub fn transmit(&mut self, address: Address, command: Command) -> Result<Frame, LED::Error> {
        let frame = Frame::encode(address, command);

        self.indicator.set_high().map_err(Error::Indicator)?;
        for repeat in 0..FRAME_REPEATS {
            if repeat > 0 {
                self.sequencer.emit(Symbol::GAP);
            }
            self.send_frame(frame);
        }
        self.indicator.set_low().map_err(Error::Indicator)?;

        Ok(frame)
    }

    pub fn sequencer(&self) -> &PulseSequencer<T> {
        &self.sequencer
    }

    pub fn release(self) -> (PulseSequencer<T>, LED) {
        (self.sequencer, self.indicator)
    }
}
