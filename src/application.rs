//! Wake / dispatch / transmit / release control loop

use crate::config::RemoteConfig;
use crate::drivers::{Button, ButtonPair, CarrierTimer, LowPower};
use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::protocol::{Frame, SonyEncoder};
use embedded_hal::digital::v2::{InputPin, OutputPin};
use ufmt::uWrite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Halted until a button line changes
    Sleeping,
    /// Awake, about to sample the buttons
    Dispatching,
    /// Sending the command bound to this button
    Transmitting(Button),
    /// Waiting for both buttons to be let go
    AwaitRelease,
}

/// One frame per wake: sleep, read the buttons once, send, wait for release.
///
/// Buttons are not read again while a transmission is running, so letting go
/// mid-frame does not cut it short, and holding a button does not repeat it.
pub struct Application<T, LED, R, L, P, W> {
    config: RemoteConfig,
    encoder: SonyEncoder<T, LED>,
    buttons: ButtonPair<R, L>,
    power: P,
    logger: Logger<W>,
    state: State,
    last_frame: Option<Frame>,
}

impl<T, LED, R, L, P, W, E> Application<T, LED, R, L, P, W>
where
    T: CarrierTimer,
    LED: OutputPin<Error = E>,
    R: InputPin<Error = E>,
    L: InputPin<Error = E>,
    P: LowPower,
    W: uWrite,
{
    pub fn new(
        config: RemoteConfig,
        encoder: SonyEncoder<T, LED>,
        buttons: ButtonPair<R, L>,
        power: P,
        logger: Logger<W>,
    ) -> Self {
        Self {
            config,
            encoder,
            buttons,
            power,
            logger,
            state: State::Sleeping,
            last_frame: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Performs the work of the current state and moves to the next one
    pub fn step(&mut self) -> Result<State, E> {
        self.state = match self.state {
            State::Sleeping => {
                self.power.sleep_until_wake();
                self.logger.log_system("wake");
                State::Dispatching
            }
            State::Dispatching => match self.buttons.sample().map_err(Error::Button)? {
                Some(button) => State::Transmitting(button),
                None => {
                    self.logger.log_system("spurious wake");
                    State::AwaitRelease
                }
            },
            State::Transmitting(button) => {
                let command = self.config.command_for(button);
                self.logger.log_debug("command", u32::from(command.value()));
                let frame = self.encoder.transmit(self.config.address, command)?;
                self.logger.log_debug("frame", frame.bits());
                self.last_frame = Some(frame);
                State::AwaitRelease
            }
            State::AwaitRelease => {
                self.buttons.wait_release().map_err(Error::Button)?;
                self.logger.log_system("released");
                State::Sleeping
            }
        };
        Ok(self.state)
    }

    /// Runs one full wake cycle back to sleep. Returns the frame sent, if any.
    pub fn run_cycle(&mut self) -> Result<Option<Frame>, E> {
        self.last_frame = None;
        while self.step()? != State::Sleeping {}
        Ok(self.last_frame.take())
    }

    pub fn run(mut self) -> ! {
        self.logger.log_system("remote ready");
        self.logger.log_debug("address", u32::from(self.config.address.value()));
        loop {
            if self.run_cycle().is_err() {
                self.logger.log_error("gpio fault");
                self.state = State::Sleeping;
            }
        }
    }

    pub fn encoder(&self) -> &SonyEncoder<T, LED> {
        &self.encoder
    }

    pub fn power(&self) -> &P {
        &self.power
    }

    pub fn logger(&self) -> &Logger<W> {
        &self.logger
    }

    pub fn release(self) -> (SonyEncoder<T, LED>, ButtonPair<R, L>, P, Logger<W>) {
        (self.encoder, self.buttons, self.power, self.logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::PulseSequencer;
    use crate::protocol::Command;
    use crate::testing::{Capture, CountingSleep, RecordingCarrier};
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
    use PinState::{High, Low};

    type TestApp = Application<RecordingCarrier, PinMock, PinMock, PinMock, CountingSleep, Capture>;

    fn reads(states: &[PinState]) -> PinMock {
        let transactions: Vec<PinTransaction> =
            states.iter().map(|s| PinTransaction::get(*s)).collect();
        PinMock::new(&transactions)
    }

    fn app(led: PinMock, right: PinMock, left: PinMock) -> TestApp {
        let encoder = SonyEncoder::new(PulseSequencer::new(RecordingCarrier::new()), led);
        Application::new(
            RemoteConfig::DEFAULT,
            encoder,
            ButtonPair::new(right, left),
            CountingSleep::new(),
            Logger::new(Capture::default()),
        )
    }

    fn finish(app: TestApp) -> (RecordingCarrier, CountingSleep, String) {
        let (encoder, buttons, power, logger) = app.release();
        let (sequencer, mut led) = encoder.release();
        let (mut right, mut left) = buttons.release();
        led.done();
        right.done();
        left.done();
        (sequencer.free(), power, logger.into_inner().0)
    }

    fn blink() -> PinMock {
        PinMock::new(&[PinTransaction::set(High), PinTransaction::set(Low)])
    }

    #[test]
    fn walks_through_every_state() {
        let mut app = app(blink(), reads(&[Low, High]), reads(&[High]));
        assert_eq!(app.state(), State::Sleeping);
        assert_eq!(app.step().unwrap(), State::Dispatching);
        assert_eq!(app.step().unwrap(), State::Transmitting(Button::Right));
        assert_eq!(app.step().unwrap(), State::AwaitRelease);
        assert_eq!(app.step().unwrap(), State::Sleeping);

        let (timer, power, log) = finish(app);
        assert_eq!(power.wakes(), 1);
        assert_eq!(timer.symbols().len(), 65);
        assert_eq!(
            log,
            "[SYS] wake\r\n[DBG] command: 0x2D\r\n[DBG] frame: 0xF1D2D\r\n[SYS] released\r\n"
        );
    }

    #[test]
    fn left_button_sends_two_second_code() {
        let mut app = app(blink(), reads(&[High, High]), reads(&[Low, High]));
        let frame = app.run_cycle().unwrap();
        assert_eq!(frame.map(Frame::bits), Some((0x1E3A << 7) | 0x37));
        finish(app);
    }

    #[test]
    fn spurious_wake_sends_nothing() {
        let mut app = app(PinMock::new(&[]), reads(&[High, High]), reads(&[High, High]));
        assert_eq!(app.run_cycle().unwrap(), None);

        let (timer, power, log) = finish(app);
        assert!(timer.symbols().is_empty());
        assert_eq!(power.wakes(), 1);
        assert_eq!(log, "[SYS] wake\r\n[SYS] spurious wake\r\n[SYS] released\r\n");
    }

    #[test]
    fn rebound_button_uses_new_command() {
        let mut app = app(blink(), reads(&[Low, High]), reads(&[High]));
        app.config = RemoteConfig::DEFAULT.with_binding(Button::Right, Command::VIDEO);
        let frame = app.run_cycle().unwrap();
        assert_eq!(frame.map(|f| f.bits() & 0x7F), Some(0x48));
        finish(app);
    }

    #[test]
    fn button_fault_is_reported() {
        use embedded_hal_mock::MockError;
        use std::io::ErrorKind;

        let right = PinMock::new(&[
            PinTransaction::get(Low).with_error(MockError::Io(ErrorKind::BrokenPipe))
        ]);
        let mut app = app(PinMock::new(&[]), right, reads(&[]));
        assert!(matches!(app.run_cycle(), Err(Error::Button(_))));
        assert_eq!(app.state(), State::Dispatching);
        finish(app);
    }
}
