//! Color space conversion helpers.

use palette::{FromColor, Hsv, Srgb};

/// Converts an 8-bit hue wheel position and saturation to an RGB color.
///
/// The controller stores hue as a single byte; it is expanded to full
/// angular resolution (0-360 degrees) only here. Value is fixed at 1.0 so
/// perceived intensity stays under the master brightness alone.
#[inline]
pub fn hue_sat_to_rgb(hue: u8, sat: u8) -> Srgb<u8> {
    let hsv = Hsv::new(hue as f32 * (360.0 / 256.0), sat as f32 / 255.0, 1.0);
    Srgb::from_color(hsv).into_format()
}
