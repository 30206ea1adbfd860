#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RotaryEncoderUi`**: polls the encoder and button and turns them into lighting intents
//! - **`UiMode`**: which parameter the knob currently adjusts (brightness, main color, saturation)
//! - **`LightingState`**: trait the host implements to expose brightness, power, segments and notifications
//! - **`PinBus`** / **`PinAllocator`**: traits for digital pin access and exclusive pin ownership
//! - **`Clock`**: trait for the host's monotonic millisecond clock
//! - **`EncoderUiConfig`** / **`ConfigUpdate`**: persisted settings export/import records
//!
//! The controller is single-threaded and cooperative: the host calls
//! [`RotaryEncoderUi::service`] from its main loop and the controller returns
//! without blocking, emitting at most one decoded intent per call.

pub mod colors;
pub mod config;
pub mod controller;
pub mod hal;
pub mod lighting;
pub mod time;
pub mod types;

pub use colors::hue_sat_to_rgb;
pub use config::{CONFIG_KEY, ConfigUpdate, EncoderUiConfig, PIN_OPTIONS, PinOption, pin_options};
pub use controller::{DEFAULT_CLK_PIN, DEFAULT_DT_PIN, DEFAULT_SW_PIN, RotaryEncoderUi};
pub use hal::{PIN_OWNER, Pin, PinAllocator, PinBus, PinOwner};
pub use lighting::{ChangeCause, LightingState};
pub use time::Clock;
pub use types::{Direction, SetupError, UiMode};
