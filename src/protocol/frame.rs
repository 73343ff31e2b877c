//! Frame assembly and pulse symbols

use super::{Address, Command, COMMAND_BITS};
use crate::config::FRAME_REPEATS;
use core::iter;

/// Number of data bits in a frame
pub const FRAME_BITS: u8 = 20;

/// Marks at least this long read back as a 1 bit (halfway between 24 and 48)
const ONE_THRESHOLD: u16 = 36;

/// Marks at least this long read back as a start symbol
const START_THRESHOLD: u16 = 72;

/// One mark followed by one space, both counted in carrier periods
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Symbol {
    pub on: u16,
    pub off: u16,
}

impl Symbol {
    pub const START: Self = Self::new(96, 24);
    pub const ONE: Self = Self::new(48, 24);
    pub const ZERO: Self = Self::new(24, 24);
    /// Pause between repetitions, 430 periods is about 11ms
    pub const GAP: Self = Self::new(0, 430);

    pub const fn new(on: u16, off: u16) -> Self {
        Self { on, off }
    }

    pub const fn for_bit(bit: bool) -> Self {
        if bit {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    /// Total length in carrier periods
    pub const fn periods(self) -> u32 {
        self.on as u32 + self.off as u32
    }
}

/// 20-bit frame: address in the high 13 bits, command in the low 7 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame(u32);

impl Frame {
    /// Joins address and command without range checks. Oversized values
    /// overlap the neighbouring field; see [`Frame::checked`].
    pub const fn encode(address: Address, command: Command) -> Self {
        Self((address.value() as u32) << COMMAND_BITS | command.value() as u32)
    }

    /// Like [`Frame::encode`], but `None` if either field does not fit
    pub const fn checked(address: Address, command: Command) -> Option<Self> {
        if address.fits() && command.fits() {
            Some(Self::encode(address, command))
        } else {
            None
        }
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn bit(self, index: u8) -> bool {
        self.0 & (1 << index) != 0
    }

    /// Start symbol followed by the 20 data bits, LSB first
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        iter::once(Symbol::START).chain((0..FRAME_BITS).map(move |i| Symbol::for_bit(self.bit(i))))
    }

    /// Length of one frame in carrier periods
    pub fn duration_periods(self) -> u32 {
        self.symbols().map(Symbol::periods).sum()
    }
}

/// Length of a full press (three frames and two gaps) in carrier periods
pub fn transmission_periods(frame: Frame) -> u32 {
    let repeats = u32::from(FRAME_REPEATS);
    repeats * frame.duration_periods() + (repeats - 1) * Symbol::GAP.periods()
}

/// Reads one frame back from its symbols by mark length.
///
/// Expects exactly a start symbol and 20 bit symbols; anything else is `None`.
pub fn decode(symbols: &[Symbol]) -> Option<Frame> {
    let (start, data) = symbols.split_first()?;
    if start.on < START_THRESHOLD || data.len() != usize::from(FRAME_BITS) {
        return None;
    }

    let mut bits = 0u32;
    for (i, symbol) in data.iter().enumerate() {
        if symbol.on == 0 || symbol.on >= START_THRESHOLD {
            return None;
        }
        if symbol.on >= ONE_THRESHOLD {
            bits |= 1 << i;
        }
    }
    Some(Frame(bits))
}
