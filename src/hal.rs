//! Pin capability traits for host GPIO access.
//!
//! The controller never touches hardware directly. The host injects a
//! [`PinAllocator`] for exclusive pin ownership and a [`PinBus`] for
//! configuring and reading the three encoder lines, which keeps the
//! controller testable in isolation.

/// A host pin identifier.
///
/// Negative values mean "unassigned". The controller refuses to run with an
/// unassigned pin and disables itself instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Pin(pub i8);

impl Pin {
    /// The "no pin assigned" sentinel.
    pub const UNASSIGNED: Pin = Pin(-1);

    /// Returns true if this is a usable pin index.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl From<i8> for Pin {
    fn from(index: i8) -> Self {
        Pin(index)
    }
}

/// Tag identifying the owner of reserved pins in the host pin registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinOwner(pub &'static str);

/// Owner tag used for every reservation made by this crate.
pub const PIN_OWNER: PinOwner = PinOwner("rotary-encoder-ui");

/// Exclusive pin-ownership registry provided by the host.
pub trait PinAllocator {
    /// Reserves all of `pins` for `owner`, or none of them.
    ///
    /// Returns false when any pin is already claimed elsewhere.
    fn reserve(&mut self, pins: &[Pin], owner: PinOwner) -> bool;

    /// Releases a previously reserved pin.
    fn release(&mut self, pin: Pin, owner: PinOwner);
}

/// Digital pin access provided by the host.
pub trait PinBus {
    /// Configures a pin as a digital input with pull-up biasing.
    fn configure_input_pullup(&mut self, pin: Pin);

    /// Reads the logic level of a pin (`true` = high).
    fn read(&self, pin: Pin) -> bool;
}
