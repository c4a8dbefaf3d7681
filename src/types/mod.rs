//! Core value types for blockies.
//!
//! - `Colour` - RGBA colour values consumed by surfaces
//! - `HslColour` - generated colours in CSS HSL units
//! - `Cell` / `PixelGrid` - the mirrored icon pattern

mod colour;
mod grid;
mod hsl;

pub use colour::Colour;
pub use grid::{Cell, PixelGrid};
pub use hsl::HslColour;
