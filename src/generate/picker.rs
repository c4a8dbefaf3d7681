//! Colour picker.

use crate::random::SeededRandom;
use crate::types::HslColour;

/// Draws taken by one call to [`create_colour`].
pub const DRAWS_PER_COLOUR: u64 = 6;

/// Draw a colour from `rng`.
///
/// Saturation stays in `[40, 100)` to avoid greyish colours. Lightness is the
/// sum of four draws, which biases it towards the middle of `[0, 100)`.
pub fn create_colour(rng: &mut SeededRandom) -> HslColour {
    let hue = (rng.next_f64() * 360.0).floor() as u32;
    let saturation = rng.next_f64() * 60.0 + 40.0;
    let lightness = (rng.next_f64() + rng.next_f64() + rng.next_f64() + rng.next_f64()) * 25.0;

    HslColour::new(hue, saturation, lightness)
}
