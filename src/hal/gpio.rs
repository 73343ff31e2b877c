use avr_device::attiny85::PORTB;
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct PullUp;
pub struct Output;
impl PinMode for Input {}
impl PinMode for PullUp {}
impl PinMode for Output {}

/// Readable modes
pub trait InputMode: PinMode {}
impl InputMode for Input {}
impl InputMode for PullUp {}

/// PORTB pin `P` in mode `MODE`
#[derive(Debug)]
pub struct Pin<const P: u8, MODE> {
    _mode: PhantomData<MODE>,
}

#[inline(always)]
fn port() -> &'static avr_device::attiny85::portb::RegisterBlock {
    unsafe { &*PORTB::ptr() }
}

impl<const P: u8, MODE: PinMode> Pin<P, MODE> {
    const fn new() -> Self {
        Pin { _mode: PhantomData }
    }

    pub fn into_output(self) -> Pin<P, Output> {
        unsafe {
            port().ddrb.modify(|r, w| w.bits(r.bits() | (1 << P)));
        }
        Pin::new()
    }

    pub fn into_pull_up_input(self) -> Pin<P, PullUp> {
        unsafe {
            port().ddrb.modify(|r, w| w.bits(r.bits() & !(1 << P)));
            port().portb.modify(|r, w| w.bits(r.bits() | (1 << P)));
        }
        Pin::new()
    }

    pub fn into_floating_input(self) -> Pin<P, Input> {
        unsafe {
            port().ddrb.modify(|r, w| w.bits(r.bits() & !(1 << P)));
            port().portb.modify(|r, w| w.bits(r.bits() & !(1 << P)));
        }
        Pin::new()
    }
}

impl<const P: u8> OutputPin for Pin<P, Output> {
    type Error = Infallible;

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        unsafe {
            port().portb.modify(|r, w| w.bits(r.bits() & !(1 << P)));
        }
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        unsafe {
            port().portb.modify(|r, w| w.bits(r.bits() | (1 << P)));
        }
        Ok(())
    }
}

impl<const P: u8, MODE: InputMode> InputPin for Pin<P, MODE> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(port().pinb.read().bits() & (1 << P) != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(port().pinb.read().bits() & (1 << P) == 0)
    }
}

/// All PORTB pins, floating inputs as after reset
pub struct Pins {
    pub pb0: Pin<0, Input>,
    pub pb1: Pin<1, Input>,
    pub pb2: Pin<2, Input>,
    pub pb3: Pin<3, Input>,
    pub pb4: Pin<4, Input>,
}

impl Pins {
    /// Takes the port so the pins can only be handed out once
    pub fn new(_portb: PORTB) -> Self {
        Self {
            pb0: Pin::new(),
            pb1: Pin::new(),
            pb2: Pin::new(),
            pb3: Pin::new(),
            pb4: Pin::new(),
        }
    }
}

// Remote board wiring
pub mod board {
    use super::{Output, Pin, PullUp};

    /// Status LED
    pub type Led = Pin<0, Output>;
    /// IR LED on OC0B, driven by Timer0
    pub type IrOut = Pin<1, Output>;
    /// Diagnostic serial TX (`debug` feature)
    pub type DebugTx = Pin<2, Output>;
    pub type ButtonLeft = Pin<3, PullUp>;
    pub type ButtonRight = Pin<4, PullUp>;

    pub const BUTTON_LEFT: u8 = 3;
    pub const BUTTON_RIGHT: u8 = 4;
}
