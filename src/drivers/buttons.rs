use embedded_hal::digital::v2::InputPin;

/// The two momentary buttons on the remote
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Right,
    Left,
}

/// Right and left button lines, active low with pull-ups.
///
/// No debouncing: the lines are sampled once after wake, and the control loop
/// waits for both to be released before sleeping again.
pub struct ButtonPair<R, L> {
    right: R,
    left: L,
}

impl<R, L, E> ButtonPair<R, L>
where
    R: InputPin<Error = E>,
    L: InputPin<Error = E>,
{
    pub fn new(right: R, left: L) -> Self {
        Self { right, left }
    }

    /// The pressed button, right taking priority when both are held
    pub fn sample(&self) -> Result<Option<Button>, E> {
        if self.right.is_low()? {
            Ok(Some(Button::Right))
        } else if self.left.is_low()? {
            Ok(Some(Button::Left))
        } else {
            Ok(None)
        }
    }

    /// True when neither line is pulled low
    pub fn released(&self) -> Result<bool, E> {
        Ok(self.right.is_high()? && self.left.is_high()?)
    }

    /// Spins until both buttons read released
    pub fn wait_release(&self) -> Result<(), E> {
        while !self.released()? {}
        Ok(())
    }

    pub fn release(self) -> (R, L) {
        (self.right, self.left)
    }
}
