//! HSL colours as produced by the colour picker.

use std::fmt;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Serialize, Serializer};

use super::Colour;

/// A colour in HSL space, in CSS units.
///
/// `hue` is in degrees, `saturation` and `lightness` in percent. Displays as
/// `hsl(h,s%,l%)` with floats in shortest round-trip form, so generated
/// strings compare equal to identicons produced elsewhere from the same seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColour {
    pub hue: u32,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslColour {
    pub fn new(hue: u32, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to an opaque RGB colour.
    pub fn to_colour(self) -> Colour {
        hsl_to_colour(f64::from(self.hue), self.saturation, self.lightness)
    }
}

impl fmt::Display for HslColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.hue, self.saturation, self.lightness)
    }
}

impl Serialize for HslColour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Convert CSS HSL units to RGB.
///
/// Hue wraps modulo 360; saturation and lightness clamp to `[0, 100]`.
pub(crate) fn hsl_to_colour(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let hue = hue.rem_euclid(360.0) as f32;
    let saturation = (saturation / 100.0).clamp(0.0, 1.0) as f32;
    let lightness = (lightness / 100.0).clamp(0.0, 1.0) as f32;

    let hsl: Hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb<f32> = hsl.into_color();

    Colour::rgb(
        (rgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
        (rgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
        (rgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}
