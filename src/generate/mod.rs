//! Icon generation.
//!
//! A generation session seeds its own [`SeededRandom`], resolves options,
//! draws the colours it needs and then the pattern. Nothing is shared
//! between sessions, so icons can be generated from any number of threads.

mod options;
mod pattern;
mod picker;

pub use options::{
    build_opts, build_opts_with, random_seed, Fill, IconConfig, IconOptions, DEFAULT_SCALE,
    DEFAULT_SIZE, MAX_CANVAS,
};
pub use pattern::create_image_data;
pub use picker::{create_colour, DRAWS_PER_COLOUR};

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::random::SeededRandom;
use crate::types::PixelGrid;

/// A generated icon: resolved configuration plus its pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub config: IconConfig,
    pub pixels: PixelGrid,
}

/// Resolved configuration, a blank line, then the pattern rows.
impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.config;
        writeln!(f, "seed:      {}", config.seed)?;
        writeln!(f, "size:      {}", config.size)?;
        writeln!(f, "scale:     {}", config.scale)?;
        writeln!(f, "color:     {}", config.color)?;
        writeln!(f, "bgcolor:   {}", config.bgcolor)?;
        writeln!(f, "spotcolor: {}", config.spotcolor)?;
        writeln!(f)?;
        write!(f, "{}", self.pixels)
    }
}

/// Generate an icon from `options`.
pub fn generate(options: &IconOptions) -> Result<Icon> {
    generate_with(options, &mut fastrand::Rng::new())
}

/// Generate an icon, drawing any default seed from `entropy`.
pub fn generate_with(options: &IconOptions, entropy: &mut fastrand::Rng) -> Result<Icon> {
    let mut rng = SeededRandom::default();
    let config = build_opts_with(options, &mut rng, entropy)?;
    let pixels = create_image_data(&mut rng, config.size as usize);

    Ok(Icon { config, pixels })
}
