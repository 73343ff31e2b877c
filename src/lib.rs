//! Infrared shutter remote for Sony NEX/Alpha cameras on an ATtiny85.
//!
//! Everything except [`hal`] is hardware independent and runs on the host.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod drivers;
pub mod error;
pub mod logger;
pub mod protocol;
pub mod testing;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::{Application, State};
pub use config::RemoteConfig;
pub use error::Error;
