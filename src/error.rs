//! Error type shared by the encoder and the control loop

/// GPIO failures seen while driving the remote. On the ATtiny85 every pin is
/// infallible, so `E` is `core::convert::Infallible` there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Writing the status LED failed
    Indicator(E),
    /// Reading a button line failed
    Button(E),
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;
