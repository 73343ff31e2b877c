//! ATtiny85 register-level implementations of the driver traits

pub mod carrier;
pub mod gpio;
pub mod power;
#[cfg(feature = "debug")]
pub mod soft_serial;

pub use carrier::Tc0Carrier;
pub use gpio::{board, Input, Output, Pin, Pins, PullUp};
pub use power::{PowerDown, SleepMode};
#[cfg(feature = "debug")]
pub use soft_serial::SoftSerial;
