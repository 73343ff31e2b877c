pub mod buttons;
pub mod carrier;
pub mod power;
pub mod pulse;

pub use buttons::{Button, ButtonPair};
pub use carrier::CarrierTimer;
pub use power::LowPower;
pub use pulse::PulseSequencer;
