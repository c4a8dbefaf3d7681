//! blockies - Deterministic blocky identicons
//!
//! Generates small mirrored pixel-art icons from seed strings. The same seed
//! always yields the same pattern and colours, compatible with the widely
//! used "blockies" identicons for addresses and usernames.
//!
//! ```no_run
//! use blockies::{create, IconOptions};
//!
//! let image = create(&IconOptions::new().with_seed("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359"))?;
//! blockies::write_png(&image, std::path::Path::new("icon.png"))?;
//! # Ok::<(), blockies::BlockiesError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod random;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{BlockiesError, Result};
pub use generate::{
    build_opts, create_colour, create_image_data, generate, Fill, Icon, IconConfig, IconOptions,
    MAX_CANVAS,
};
pub use random::SeededRandom;
pub use render::{create, encode_png, paint, render, write_png, Surface};
pub use types::{Cell, Colour, HslColour, PixelGrid};
