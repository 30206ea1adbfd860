//! Host lighting-state capability.
//!
//! The host's shared brightness, power and segment state is reached through
//! the [`LightingState`] trait rather than ambient globals, so the
//! controller can be exercised against a mock in tests.

use palette::Srgb;

/// Cause code attached to state-change notifications.
///
/// Lets subscribed host components (network sync, web UI, presets) tell
/// which part of the system originated a change. This module always reports
/// [`ChangeCause::Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChangeCause {
    /// Initial state application at boot.
    Init,

    /// Direct change through the host API.
    Direct,

    /// Physical button or encoder input.
    Button,

    /// Change received from a peer notification.
    Notification,

    /// Preset application.
    Preset,

    /// Anything else; peers are not notified.
    Other,
}

/// Capability handle onto the host's shared lighting state.
///
/// Mutations happen in-place and are single-writer by convention of the
/// host's own single-threaded main loop.
pub trait LightingState {
    /// True while the host is inside a time-critical render pass.
    ///
    /// The controller defers polling while this is set, up to a bounded
    /// delay, so it never interferes with LED output timing.
    fn is_rendering(&self) -> bool;

    /// Current master brightness.
    fn brightness(&self) -> u8;

    /// Sets master brightness.
    fn set_brightness(&mut self, value: u8);

    /// Toggles the strip on or off.
    fn toggle_power(&mut self);

    /// Number of configured segments.
    fn segment_count(&self) -> usize;

    /// True if the segment at `index` is active.
    fn segment_is_active(&self, index: usize) -> bool;

    /// Index of the main (currently selected) segment.
    fn main_segment(&self) -> usize;

    /// Sets the primary color of the segment at `index`.
    fn set_segment_color(&mut self, index: usize, color: Srgb<u8>);

    /// Pushes a state-change notification to subscribed host components.
    fn notify(&mut self, cause: ChangeCause);
}
