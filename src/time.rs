//! Time abstraction for platform-agnostic polling.

/// Trait for abstracting monotonic millisecond clocks.
///
/// The controller never sleeps or blocks; every timeout (long press, double
/// press window, poll rate limit) is a comparison against timestamps taken
/// from this source. Implement it over your platform's tick counter.
pub trait Clock {
    /// Returns milliseconds elapsed since some fixed epoch.
    fn now_ms(&self) -> u64;
}
