//! Low power wait

/// Halts the CPU until a wake interrupt fires. The interrupt itself does no
/// work; returning from this call is the whole signal.
pub trait LowPower {
    fn sleep_until_wake(&mut self);
}
