//! Rotary encoder UI controller.
//!
//! Provides [`RotaryEncoderUi`], which owns the three encoder pins, polls
//! them at a bounded cadence and translates rotation and button gestures
//! into brightness/color adjustments on the host's [`LightingState`].

use crate::colors::hue_sat_to_rgb;
use crate::config::{ConfigUpdate, EncoderUiConfig};
use crate::hal::{PIN_OWNER, Pin, PinAllocator, PinBus};
use crate::lighting::{ChangeCause, LightingState};
use crate::time::Clock;
use crate::types::{Direction, SetupError, UiMode};

/// Nominal per-detent adjustment step.
const FADE_AMOUNT: u8 = 5;

/// Below this brightness, steps shrink to half for finer control.
const LOW_BRIGHTNESS_KNEE: u8 = 40;

/// Minimum interval between processed polls (one poll per 2 ms = 500 Hz).
const MIN_POLL_INTERVAL_MS: u64 = 2;

/// While the host is rendering, polls are deferred up to this long.
///
/// 8 ms still admits 120 detents per second, a full turn per second on a
/// 30-detent encoder, so deferral is invisible to the user.
const MAX_RENDER_DELAY_MS: u64 = 8;

/// Hold duration that turns a press into a long press.
const LONG_PRESS_MS: u64 = 3000;

/// Quiet period that separates a single press from a double press.
const DOUBLE_PRESS_WINDOW_MS: u64 = 350;

/// Default encoder A (DT) pin.
pub const DEFAULT_DT_PIN: Pin = Pin(5);

/// Default encoder B (CLK) pin.
pub const DEFAULT_CLK_PIN: Pin = Pin(9);

/// Default button (SW) pin.
pub const DEFAULT_SW_PIN: Pin = Pin(7);

/// Rotary-encoder-with-button UI controller.
///
/// Owns the encoder A/B and button pins and decodes them into a small set
/// of lighting intents: brightness, hue and saturation steps (selected by
/// the current [`UiMode`]), mode advance on a single press, and power
/// toggle on a double press. All work happens inside [`service`], invoked
/// cooperatively from the host main loop; nothing here blocks.
///
/// # Type Parameters
/// * `'t` - Lifetime of the clock reference
/// * `C` - Clock implementation type
/// * `B` - Pin bus implementation type
///
/// [`service`]: RotaryEncoderUi::service
pub struct RotaryEncoderUi<'t, C: Clock, B: PinBus> {
    clock: &'t C,
    bus: B,

    dt_pin: Pin,
    clk_pin: Pin,
    sw_pin: Pin,

    mode: UiMode,
    hue: u8,
    sat: u8,
    apply_to_all: bool,

    enc_a: bool,
    enc_b: bool,
    enc_a_prev: bool,

    pressed_before: bool,
    long_pressed: bool,
    pressed_at_ms: u64,
    wait_window: Option<u64>,

    last_service_ms: u64,
    init_done: bool,
    enabled: bool,
}

impl<'t, C: Clock, B: PinBus> RotaryEncoderUi<'t, C, B> {
    /// Creates a controller with the default pin assignment (DT=5, CLK=9, SW=7).
    pub fn new(bus: B, clock: &'t C) -> Self {
        Self::with_pins(bus, clock, DEFAULT_DT_PIN, DEFAULT_CLK_PIN, DEFAULT_SW_PIN)
    }

    /// Creates a controller with an explicit pin assignment.
    pub fn with_pins(bus: B, clock: &'t C, dt: Pin, clk: Pin, sw: Pin) -> Self {
        Self {
            clock,
            bus,
            dt_pin: dt,
            clk_pin: clk,
            sw_pin: sw,
            mode: UiMode::Brightness,
            hue: 16,
            sat: 255,
            apply_to_all: true,
            enc_a: false,
            enc_b: false,
            enc_a_prev: false,
            pressed_before: false,
            long_pressed: false,
            pressed_at_ms: 0,
            wait_window: None,
            last_service_ms: 0,
            init_done: false,
            enabled: true,
        }
    }

    /// Reserves the pins and takes the initial quadrature sample.
    ///
    /// On any unassigned pin or a refused reservation the controller forces
    /// all pins to [`Pin::UNASSIGNED`] and disables itself; subsequent
    /// [`service`] calls are no-ops until the pins are reconfigured through
    /// [`apply_config`].
    ///
    /// [`service`]: RotaryEncoderUi::service
    /// [`apply_config`]: RotaryEncoderUi::apply_config
    pub fn setup(&mut self, allocator: &mut impl PinAllocator) -> Result<(), SetupError> {
        if !self.pins_valid() {
            self.disable_with_unassigned_pins();
            return Err(SetupError::InvalidPin);
        }

        let pins = [self.dt_pin, self.clk_pin, self.sw_pin];
        if !allocator.reserve(&pins, PIN_OWNER) {
            self.disable_with_unassigned_pins();
            return Err(SetupError::ReservationFailed);
        }

        self.bus.configure_input_pullup(self.dt_pin);
        self.bus.configure_input_pullup(self.clk_pin);
        self.bus.configure_input_pullup(self.sw_pin);

        self.last_service_ms = self.clock.now_ms();

        self.enc_a = self.bus.read(self.dt_pin);
        self.enc_b = self.bus.read(self.clk_pin);
        self.enc_a_prev = self.enc_a;

        self.init_done = true;
        Ok(())
    }

    /// Polls the encoder and button once. Never blocks.
    ///
    /// Call this from the host main loop every few milliseconds. Processing
    /// is rate-limited to one poll per 2 ms, and deferred for up to 8 ms
    /// while `lighting` reports an active render pass.
    pub fn service(&mut self, lighting: &mut impl LightingState) {
        if !self.enabled {
            return;
        }

        let now = self.clock.now_ms();
        let elapsed = now.saturating_sub(self.last_service_ms);

        // Yield to an active render pass, but never starve past 8 ms.
        if lighting.is_rendering() && elapsed < MAX_RENDER_DELAY_MS {
            return;
        }
        if elapsed < MIN_POLL_INTERVAL_MS {
            return;
        }

        self.service_button(now, lighting);
        self.service_encoder(lighting);

        self.last_service_ms = now;
    }

    /// Decodes press, long-press, single-press and double-press gestures.
    fn service_button(&mut self, now: u64, lighting: &mut impl LightingState) {
        let pressed = !self.bus.read(self.sw_pin); // active low

        if pressed {
            if !self.pressed_before {
                self.pressed_at_ms = now;
                self.pressed_before = true;
            }
            if now.saturating_sub(self.pressed_at_ms) > LONG_PRESS_MS {
                self.long_pressed = true;
            }
        } else if self.pressed_before {
            let second_click = self.wait_window.take().is_some();
            if !self.long_pressed {
                if second_click {
                    lighting.toggle_power();
                    lighting.notify(ChangeCause::Button);
                } else {
                    // Defer the single-press action until the quiet period
                    // confirms no second click is coming.
                    self.wait_window = Some(now);
                }
            }
            self.long_pressed = false;
            self.pressed_before = false;
        }

        // Window expiry runs before quadrature decoding so a pending mode
        // advance never races this tick's rotation handling.
        if let Some(opened) = self.wait_window {
            if !self.pressed_before && now.saturating_sub(opened) > DOUBLE_PRESS_WINDOW_MS {
                self.wait_window = None;
                self.mode = self.mode.next();
            }
        }
    }

    /// Decodes one detent per falling edge of encoder line A.
    fn service_encoder(&mut self, lighting: &mut impl LightingState) {
        self.enc_a = self.bus.read(self.dt_pin);
        self.enc_b = self.bus.read(self.clk_pin);

        // The falling edge of A is the detent point; registering only there
        // keeps rising-edge bounce from producing extra events.
        if self.enc_a_prev && !self.enc_a {
            let direction = if self.enc_b {
                Direction::CounterClockwise
            } else {
                Direction::Clockwise
            };

            match self.mode {
                UiMode::Brightness => self.change_brightness(lighting, direction),
                UiMode::MainColor => self.change_hue(lighting, direction),
                UiMode::Saturation => self.change_saturation(lighting, direction),
            }
        }

        self.enc_a_prev = self.enc_a;
    }

    /// Steps master brightness, with finer steps below the low-light knee.
    ///
    /// A step at the 0 or 255 boundary leaves the value unchanged but still
    /// notifies, so subscribers see the input even when nothing moved.
    pub fn change_brightness(&mut self, lighting: &mut impl LightingState, direction: Direction) {
        let current = lighting.brightness();
        let step = if current < LOW_BRIGHTNESS_KNEE {
            FADE_AMOUNT / 2
        } else {
            FADE_AMOUNT
        };

        let next = match direction {
            Direction::Clockwise => current.saturating_add(step),
            Direction::CounterClockwise => current.saturating_sub(step),
        };

        lighting.set_brightness(next);
        lighting.notify(ChangeCause::Button);
    }

    /// Steps the cached hue and pushes the recomputed color to segments.
    pub fn change_hue(&mut self, lighting: &mut impl LightingState, direction: Direction) {
        self.hue = Self::step_clamped(self.hue, direction);
        self.push_color(lighting);
    }

    /// Steps the cached saturation and pushes the recomputed color to segments.
    pub fn change_saturation(&mut self, lighting: &mut impl LightingState, direction: Direction) {
        self.sat = Self::step_clamped(self.sat, direction);
        self.push_color(lighting);
    }

    /// Enables or disables polling. No-op while any pin is unassigned.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.pins_valid() {
            self.enabled = enabled;
        }
    }

    /// Returns whether the controller is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the currently selected UI mode.
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Returns the cached (hue, saturation) color target.
    pub fn color_target(&self) -> (u8, u8) {
        (self.hue, self.sat)
    }

    /// Returns whether color changes apply to all active segments.
    pub fn apply_to_all(&self) -> bool {
        self.apply_to_all
    }

    /// Returns the current (DT, CLK, SW) pin assignment.
    pub fn pins(&self) -> (Pin, Pin, Pin) {
        (self.dt_pin, self.clk_pin, self.sw_pin)
    }

    /// Exports the persisted settings snapshot.
    pub fn config(&self) -> EncoderUiConfig {
        EncoderUiConfig {
            enabled: self.enabled,
            dt_pin: self.dt_pin,
            clk_pin: self.clk_pin,
            sw_pin: self.sw_pin,
            apply_to_all: self.apply_to_all,
        }
    }

    /// Applies a (partial) configuration update.
    ///
    /// Fields left `None` keep their current values. Before [`setup`] has
    /// run, pin fields simply overwrite the stored assignment. Afterwards a
    /// pin change releases the old pins and re-runs setup on the new ones;
    /// an invalid new assignment disables the controller instead of
    /// erroring.
    ///
    /// [`setup`]: RotaryEncoderUi::setup
    pub fn apply_config(
        &mut self,
        update: &ConfigUpdate,
        allocator: &mut impl PinAllocator,
    ) -> Result<(), SetupError> {
        if let Some(apply_to_all) = update.apply_to_all {
            self.apply_to_all = apply_to_all;
        }

        let new_dt = update.dt_pin.unwrap_or(self.dt_pin);
        let new_clk = update.clk_pin.unwrap_or(self.clk_pin);
        let new_sw = update.sw_pin.unwrap_or(self.sw_pin);

        let mut result = Ok(());
        if !self.init_done {
            self.dt_pin = new_dt;
            self.clk_pin = new_clk;
            self.sw_pin = new_sw;
        } else if (new_dt, new_clk, new_sw) != (self.dt_pin, self.clk_pin, self.sw_pin) {
            allocator.release(self.dt_pin, PIN_OWNER);
            allocator.release(self.clk_pin, PIN_OWNER);
            allocator.release(self.sw_pin, PIN_OWNER);

            self.dt_pin = new_dt;
            self.clk_pin = new_clk;
            self.sw_pin = new_sw;

            if self.pins_valid() {
                result = self.setup(allocator);
            } else {
                self.enabled = false;
            }
        }

        // Disabling always applies; enabling goes through the validity
        // guard so an import can never leave the controller enabled on
        // unassigned pins.
        match update.enabled {
            Some(true) => self.set_enabled(true),
            Some(false) => self.enabled = false,
            None => {}
        }

        result
    }

    fn pins_valid(&self) -> bool {
        self.dt_pin.is_valid() && self.clk_pin.is_valid() && self.sw_pin.is_valid()
    }

    fn disable_with_unassigned_pins(&mut self) {
        self.dt_pin = Pin::UNASSIGNED;
        self.clk_pin = Pin::UNASSIGNED;
        self.sw_pin = Pin::UNASSIGNED;
        self.enabled = false;
    }

    fn step_clamped(value: u8, direction: Direction) -> u8 {
        match direction {
            Direction::Clockwise => value.saturating_add(FADE_AMOUNT),
            Direction::CounterClockwise => value.saturating_sub(FADE_AMOUNT),
        }
    }

    /// Recomputes RGB from the cached hue/saturation and writes it to the
    /// targeted segments, then notifies subscribers.
    fn push_color(&mut self, lighting: &mut impl LightingState) {
        let color = hue_sat_to_rgb(self.hue, self.sat);

        if self.apply_to_all {
            for segment in 0..lighting.segment_count() {
                if !lighting.segment_is_active(segment) {
                    continue;
                }
                lighting.set_segment_color(segment, color);
            }
        } else {
            let main = lighting.main_segment();
            lighting.set_segment_color(main, color);
        }

        lighting.notify(ChangeCause::Button);
    }
}
