//! Persisted configuration records and settings-page metadata.
//!
//! The host owns the actual config store; this module only defines the
//! record shapes. With the `serde` feature the records (de)serialize under
//! the legacy field names (`DT-pin`, `CLK-pin`, `SW-pin`, `apply-2-all-seg`)
//! so existing stored configs keep working.

use crate::hal::Pin;

/// Fixed key the configuration record nests under in the host config store.
pub const CONFIG_KEY: &str = "Rotary-Encoder-Pk";

/// Snapshot of the controller's persisted settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncoderUiConfig {
    /// Whether polling is enabled.
    pub enabled: bool,

    /// Encoder A (DT) pin.
    #[cfg_attr(feature = "serde", serde(rename = "DT-pin"))]
    pub dt_pin: Pin,

    /// Encoder B (CLK) pin.
    #[cfg_attr(feature = "serde", serde(rename = "CLK-pin"))]
    pub clk_pin: Pin,

    /// Button (SW) pin.
    #[cfg_attr(feature = "serde", serde(rename = "SW-pin"))]
    pub sw_pin: Pin,

    /// Whether color changes apply to all active segments.
    #[cfg_attr(feature = "serde", serde(rename = "apply-2-all-seg"))]
    pub apply_to_all: bool,
}

/// Partial configuration update. Absent fields keep their current values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default)
)]
pub struct ConfigUpdate {
    /// New enabled flag, if present.
    pub enabled: Option<bool>,

    /// New encoder A (DT) pin, if present.
    #[cfg_attr(feature = "serde", serde(rename = "DT-pin"))]
    pub dt_pin: Option<Pin>,

    /// New encoder B (CLK) pin, if present.
    #[cfg_attr(feature = "serde", serde(rename = "CLK-pin"))]
    pub clk_pin: Option<Pin>,

    /// New button (SW) pin, if present.
    #[cfg_attr(feature = "serde", serde(rename = "SW-pin"))]
    pub sw_pin: Option<Pin>,

    /// New apply-to-all flag, if present.
    #[cfg_attr(feature = "serde", serde(rename = "apply-2-all-seg"))]
    pub apply_to_all: Option<bool>,
}

impl From<EncoderUiConfig> for ConfigUpdate {
    fn from(config: EncoderUiConfig) -> Self {
        Self {
            enabled: Some(config.enabled),
            dt_pin: Some(config.dt_pin),
            clk_pin: Some(config.clk_pin),
            sw_pin: Some(config.sw_pin),
            apply_to_all: Some(config.apply_to_all),
        }
    }
}

/// A selectable pin entry for the host settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinOption {
    /// Label shown in the settings dropdown.
    pub label: &'static str,

    /// Pin value submitted when this entry is selected.
    pub value: Pin,
}

/// Pin choices offered on the host settings page.
///
/// Values 100..=107 address the host's IO-expander pin range.
pub const PIN_OPTIONS: [PinOption; 8] = [
    PinOption { label: "P0", value: Pin(100) },
    PinOption { label: "P1", value: Pin(101) },
    PinOption { label: "P2", value: Pin(102) },
    PinOption { label: "P3", value: Pin(103) },
    PinOption { label: "P4", value: Pin(104) },
    PinOption { label: "P5", value: Pin(105) },
    PinOption { label: "P6", value: Pin(106) },
    PinOption { label: "P7", value: Pin(107) },
];

/// Returns the static settings-page pin choices.
pub fn pin_options() -> &'static [PinOption] {
    &PIN_OPTIONS
}
