//! Shared test infrastructure for rotary-encoder-ui integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use palette::Srgb;
use rotary_encoder_ui::{ChangeCause, Clock, LightingState, Pin, PinAllocator, PinBus, PinOwner};

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock monotonic clock with controllable time advancement
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

// ============================================================================
// Mock Pin Bus
// ============================================================================

/// Shared pin levels. The controller owns the bus, so tests flip lines
/// through this shared handle instead.
pub struct PinLevels {
    levels: [Cell<bool>; 16],
    reads: Cell<usize>,
    configured: Cell<usize>,
}

impl PinLevels {
    pub fn new() -> Self {
        Self {
            // Pull-up inputs idle high
            levels: core::array::from_fn(|_| Cell::new(true)),
            reads: Cell::new(0),
            configured: Cell::new(0),
        }
    }

    /// Set the logic level of a pin (true = high)
    pub fn set(&self, pin: Pin, high: bool) {
        self.levels[pin.0 as usize].set(high);
    }

    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    pub fn configured_count(&self) -> usize {
        self.configured.get()
    }
}

/// Mock pin bus backed by a shared [`PinLevels`]
pub struct MockBus<'a>(pub &'a PinLevels);

impl PinBus for MockBus<'_> {
    fn configure_input_pullup(&mut self, _pin: Pin) {
        self.0.configured.set(self.0.configured.get() + 1);
    }

    fn read(&self, pin: Pin) -> bool {
        self.0.reads.set(self.0.reads.get() + 1);
        self.0.levels[pin.0 as usize].get()
    }
}

// ============================================================================
// Mock Pin Allocator
// ============================================================================

/// A reserve or release call recorded by [`MockAllocator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorOp {
    Reserve(Pin),
    Release(Pin),
}

/// Mock pin registry that records every operation in order
pub struct MockAllocator {
    pub fail_reserve: bool,
    pub claimed: heapless::Vec<Pin, 16>,
    pub ops: heapless::Vec<AllocatorOp, 32>,
}

impl MockAllocator {
    pub fn new() -> Self {
        Self {
            fail_reserve: false,
            claimed: heapless::Vec::new(),
            ops: heapless::Vec::new(),
        }
    }

    /// An allocator that refuses every reservation
    pub fn failing() -> Self {
        Self {
            fail_reserve: true,
            claimed: heapless::Vec::new(),
            ops: heapless::Vec::new(),
        }
    }
}

impl PinAllocator for MockAllocator {
    fn reserve(&mut self, pins: &[Pin], _owner: PinOwner) -> bool {
        if self.fail_reserve || pins.iter().any(|p| self.claimed.contains(p)) {
            return false;
        }
        for &pin in pins {
            let _ = self.claimed.push(pin);
            let _ = self.ops.push(AllocatorOp::Reserve(pin));
        }
        true
    }

    fn release(&mut self, pin: Pin, _owner: PinOwner) {
        if let Some(pos) = self.claimed.iter().position(|&p| p == pin) {
            self.claimed.swap_remove(pos);
        }
        let _ = self.ops.push(AllocatorOp::Release(pin));
    }
}

// ============================================================================
// Mock Lighting State
// ============================================================================

/// One mock segment: active flag plus the last primary color written
#[derive(Debug, Clone, Copy)]
pub struct MockSegment {
    pub active: bool,
    pub color: Option<Srgb<u8>>,
}

/// Mock host lighting state that records every mutation
pub struct MockLighting {
    pub rendering: bool,
    pub brightness: u8,
    pub power_toggles: usize,
    pub main_segment: usize,
    pub segments: heapless::Vec<MockSegment, 8>,
    pub notifications: heapless::Vec<ChangeCause, 64>,
}

impl MockLighting {
    /// A single active segment at brightness 128
    pub fn new() -> Self {
        Self::with_segments(&[true], 0)
    }

    /// Segments with the given active flags and main segment index
    pub fn with_segments(active: &[bool], main_segment: usize) -> Self {
        let mut segments = heapless::Vec::new();
        for &a in active {
            let _ = segments.push(MockSegment {
                active: a,
                color: None,
            });
        }
        Self {
            rendering: false,
            brightness: 128,
            power_toggles: 0,
            main_segment,
            segments,
            notifications: heapless::Vec::new(),
        }
    }

    pub fn segment_color(&self, index: usize) -> Option<Srgb<u8>> {
        self.segments[index].color
    }
}

impl LightingState for MockLighting {
    fn is_rendering(&self) -> bool {
        self.rendering
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    fn toggle_power(&mut self) {
        self.power_toggles += 1;
    }

    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segment_is_active(&self, index: usize) -> bool {
        self.segments[index].active
    }

    fn main_segment(&self) -> usize {
        self.main_segment
    }

    fn set_segment_color(&mut self, index: usize, color: Srgb<u8>) {
        self.segments[index].color = Some(color);
    }

    fn notify(&mut self, cause: ChangeCause) {
        let _ = self.notifications.push(cause);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two 8-bit colors allowing one count of rounding slack per channel
pub fn colors_close(a: Srgb<u8>, b: Srgb<u8>) -> bool {
    a.red.abs_diff(b.red) <= 1 && a.green.abs_diff(b.green) <= 1 && a.blue.abs_diff(b.blue) <= 1
}
