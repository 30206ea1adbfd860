//! Core types shared across the controller.

/// Which logical parameter the rotary control currently adjusts.
///
/// A confirmed single button press advances to the next mode, wrapping back
/// to [`UiMode::Brightness`] after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiMode {
    /// Master brightness.
    #[default]
    Brightness,

    /// Hue of the primary color.
    MainColor,

    /// Saturation of the primary color.
    Saturation,
}

impl UiMode {
    /// Advances to the next mode, wrapping after the last.
    pub fn next(self) -> Self {
        match self {
            UiMode::Brightness => UiMode::MainColor,
            UiMode::MainColor => UiMode::Saturation,
            UiMode::Saturation => UiMode::Brightness,
        }
    }
}

/// Decoded rotation direction of the encoder shaft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise detent; the adjusted value increases.
    Clockwise,

    /// Counter-clockwise detent; the adjusted value decreases.
    CounterClockwise,
}

/// Pin setup errors.
///
/// Both variants leave the controller disabled; they are reported so the
/// host can log the cause, not to demand recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    /// One or more of the required pins is unassigned.
    InvalidPin,

    /// The host pin registry refused the reservation.
    ReservationFailed,
}

impl core::fmt::Display for SetupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::InvalidPin => {
                write!(f, "one or more encoder pins is unassigned")
            }
            SetupError::ReservationFailed => {
                write!(f, "pin registry refused the reservation")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetupError {}
