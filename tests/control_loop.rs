use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use sony_ir_remote::drivers::{ButtonPair, PulseSequencer};
use sony_ir_remote::logger::{Logger, NullSink};
use sony_ir_remote::protocol::{decode, transmission_periods, Frame, SonyEncoder, Symbol};
use sony_ir_remote::testing::{CountingSleep, RecordingCarrier};
use sony_ir_remote::{Application, RemoteConfig, State};
use PinState::{High, Low};

type Remote = Application<RecordingCarrier, PinMock, PinMock, PinMock, CountingSleep, NullSink>;

fn reads(states: &[PinState]) -> PinMock {
    let transactions: Vec<PinTransaction> = states.iter().map(|s| PinTransaction::get(*s)).collect();
    PinMock::new(&transactions)
}

fn blinks(times: usize) -> PinMock {
    let mut transactions = Vec::new();
    for _ in 0..times {
        transactions.push(PinTransaction::set(High));
        transactions.push(PinTransaction::set(Low));
    }
    PinMock::new(&transactions)
}

fn remote(led: PinMock, right: PinMock, left: PinMock) -> Remote {
    Application::new(
        RemoteConfig::DEFAULT,
        SonyEncoder::new(PulseSequencer::new(RecordingCarrier::new()), led),
        ButtonPair::new(right, left),
        CountingSleep::new(),
        Logger::new(NullSink),
    )
}

fn finish(remote: Remote) -> (RecordingCarrier, CountingSleep) {
    let (encoder, buttons, power, _) = remote.release();
    let (sequencer, mut led) = encoder.release();
    let (mut right, mut left) = buttons.release();
    led.done();
    right.done();
    left.done();
    (sequencer.free(), power)
}

#[test]
fn shutter_press_sends_three_frames() {
    let mut remote = remote(blinks(1), reads(&[Low, High]), reads(&[High]));
    let frame = remote.run_cycle().unwrap().unwrap();
    assert_eq!(frame, Frame::from_bits(0xF1D2D));
    assert_eq!(remote.state(), State::Sleeping);

    let (timer, power) = finish(remote);
    let symbols = timer.symbols();
    assert_eq!(power.wakes(), 1);
    assert_eq!(symbols.len(), 65);
    assert_eq!(
        &symbols[..4],
        &[Symbol::new(96, 24), Symbol::new(48, 24), Symbol::new(24, 24), Symbol::new(48, 24)]
    );
    for frame_symbols in [&symbols[..21], &symbols[22..43], &symbols[44..]] {
        assert_eq!(decode(frame_symbols), Some(frame));
    }
    assert_eq!(symbols[21], Symbol::new(0, 430));
    assert_eq!(symbols[43], Symbol::new(0, 430));
    assert_eq!(timer.overflows(), transmission_periods(frame));
}

#[test]
fn held_button_transmits_once_and_waits_for_release() {
    // Sampled once after wake, then held for two more polls of the release wait
    let mut remote = remote(blinks(1), reads(&[Low, Low, Low, High]), reads(&[High]));

    assert_eq!(remote.step().unwrap(), State::Dispatching);
    assert!(matches!(remote.step().unwrap(), State::Transmitting(_)));
    assert_eq!(remote.step().unwrap(), State::AwaitRelease);
    assert_eq!(remote.step().unwrap(), State::Sleeping);

    let (timer, power) = finish(remote);
    assert_eq!(power.wakes(), 1);
    assert_eq!(timer.symbols().len(), 65);
    assert_eq!(timer.restarts(), 3);
}

#[test]
fn spurious_wake_goes_back_to_sleep_silently() {
    let mut remote = remote(blinks(0), reads(&[High, High]), reads(&[High, High]));
    assert_eq!(remote.run_cycle().unwrap(), None);
    assert_eq!(remote.state(), State::Sleeping);

    let (timer, power) = finish(remote);
    assert_eq!(power.wakes(), 1);
    assert!(timer.symbols().is_empty());
    assert_eq!(timer.overflows(), 0);
}

#[test]
fn consecutive_presses_produce_identical_streams() {
    let mut remote = remote(
        blinks(2),
        reads(&[Low, High, Low, High]),
        reads(&[High, High]),
    );
    let first = remote.run_cycle().unwrap();
    let second = remote.run_cycle().unwrap();
    assert_eq!(first, second);

    let (timer, power) = finish(remote);
    assert_eq!(power.wakes(), 2);
    let symbols = timer.symbols();
    assert_eq!(symbols.len(), 130);
    assert_eq!(&symbols[..65], &symbols[65..]);
}

#[test]
fn left_then_spurious_then_right() {
    let mut remote = remote(
        blinks(2),
        // left press | spurious | right press
        reads(&[High, High, High, High, Low, High]),
        reads(&[Low, High, High, High, High]),
    );
    let left = remote.run_cycle().unwrap();
    let none = remote.run_cycle().unwrap();
    let right = remote.run_cycle().unwrap();

    assert_eq!(left.map(|f| f.bits() & 0x7F), Some(0x37));
    assert_eq!(none, None);
    assert_eq!(right.map(|f| f.bits() & 0x7F), Some(0x2D));

    let (timer, power) = finish(remote);
    assert_eq!(power.wakes(), 3);
    assert_eq!(timer.symbols().len(), 130);
}
