#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::attiny85::Peripherals;
    use sony_ir_remote::drivers::{ButtonPair, PulseSequencer};
    use sony_ir_remote::hal::{Pins, PowerDown, Tc0Carrier};
    use sony_ir_remote::logger::Logger;
    use sony_ir_remote::protocol::SonyEncoder;
    use sony_ir_remote::{Application, RemoteConfig};

    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB);

    let buttons = ButtonPair::new(pins.pb4.into_pull_up_input(), pins.pb3.into_pull_up_input());
    let mut led = pins.pb0.into_output();
    embedded_hal::digital::v2::OutputPin::set_low(&mut led).ok();

    let carrier = Tc0Carrier::new(dp.TC0, pins.pb1.into_output());
    let encoder = SonyEncoder::new(PulseSequencer::new(carrier), led);
    let power = PowerDown::new(dp.CPU, dp.EXINT, dp.ADC);

    #[cfg(feature = "debug")]
    let logger = Logger::new(sony_ir_remote::hal::SoftSerial::new(pins.pb2.into_output()));
    #[cfg(not(feature = "debug"))]
    let logger = Logger::new(sony_ir_remote::logger::NullSink);

    Application::new(RemoteConfig::DEFAULT, encoder, buttons, power, logger).run()
}

// Pin change on either button only wakes the CPU
#[cfg(target_arch = "avr")]
#[avr_device::interrupt(attiny85)]
fn PCINT0() {}

#[cfg(not(target_arch = "avr"))]
fn main() {}
