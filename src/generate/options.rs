//! Option resolution.
//!
//! Turns caller-supplied [`IconOptions`] into an [`IconConfig`]. Resolution
//! order matters: the seed is resolved and applied to the generator first,
//! then `color`, `bgcolor` and `spotcolor` are resolved in that order. Only
//! colours the caller left out consume draws, so supplying one shifts the
//! draws seen by every colour after it.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{BlockiesError, Result};
use crate::random::SeededRandom;
use crate::types::{Colour, HslColour};

use super::picker::create_colour;

/// Cells per side when no size is given.
pub const DEFAULT_SIZE: u32 = 8;

/// Output pixels per cell when no scale is given.
pub const DEFAULT_SCALE: u32 = 4;

/// Largest canvas edge in output pixels (`size * scale`).
pub const MAX_CANVAS: u32 = 4096;

/// Exclusive upper bound of the random default seed, before hex encoding.
const RANDOM_SEED_BOUND: u64 = 10_u64.pow(16);

/// Caller-supplied options. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOptions {
    pub seed: Option<String>,
    pub size: Option<i64>,
    pub scale: Option<i64>,
    pub color: Option<String>,
    pub bgcolor: Option<String>,
    pub spotcolor: Option<String>,
}

impl IconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_scale(mut self, scale: i64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_bgcolor(mut self, bgcolor: impl Into<String>) -> Self {
        self.bgcolor = Some(bgcolor.into());
        self
    }

    pub fn with_spotcolor(mut self, spotcolor: impl Into<String>) -> Self {
        self.spotcolor = Some(spotcolor.into());
        self
    }

    /// Fill fields left unset here from `defaults`.
    pub fn or(self, defaults: &IconOptions) -> Self {
        Self {
            seed: self.seed.or_else(|| defaults.seed.clone()),
            size: self.size.or(defaults.size),
            scale: self.scale.or(defaults.scale),
            color: self.color.or_else(|| defaults.color.clone()),
            bgcolor: self.bgcolor.or_else(|| defaults.bgcolor.clone()),
            spotcolor: self.spotcolor.or_else(|| defaults.spotcolor.clone()),
        }
    }
}

/// A resolved colour slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Drawn from the seeded generator.
    Generated(HslColour),
    /// Supplied by the caller, kept verbatim.
    Custom(String),
}

impl Fill {
    /// Resolve to an RGBA colour for painting.
    ///
    /// Custom strings are only parsed here, so a malformed one surfaces as
    /// an error from the rasterizer rather than from option resolution.
    pub fn to_colour(&self) -> Result<Colour> {
        match self {
            Fill::Generated(hsl) => Ok(hsl.to_colour()),
            Fill::Custom(css) => Colour::parse_css(css),
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Generated(hsl) => fmt::Display::fmt(hsl, f),
            Fill::Custom(css) => f.write_str(css),
        }
    }
}

impl Serialize for Fill {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fully resolved icon configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconConfig {
    pub seed: String,
    pub size: u32,
    pub scale: u32,
    pub color: Fill,
    pub bgcolor: Fill,
    pub spotcolor: Fill,
}

impl IconConfig {
    /// Canvas edge length in output pixels.
    ///
    /// Fails with [`BlockiesError::CanvasTooLarge`] past [`MAX_CANVAS`].
    pub fn canvas_size(&self) -> Result<u32> {
        canvas_edge(self.size, self.scale)
    }
}

/// Resolve `options`, drawing the seed default from a fresh entropy source.
pub fn build_opts(options: &IconOptions, rng: &mut SeededRandom) -> Result<IconConfig> {
    build_opts_with(options, rng, &mut fastrand::Rng::new())
}

/// Resolve `options`, drawing the seed default from `entropy`.
///
/// `rng` is reseeded with the resolved seed before any colour is drawn.
pub fn build_opts_with(
    options: &IconOptions,
    rng: &mut SeededRandom,
    entropy: &mut fastrand::Rng,
) -> Result<IconConfig> {
    let (size, scale) = validate_dimensions(options.size, options.scale)?;

    let seed = match present(&options.seed) {
        Some(seed) => seed.to_string(),
        None => random_seed(entropy),
    };

    rng.seed(&seed);

    let color = resolve_fill(&options.color, rng);
    let bgcolor = resolve_fill(&options.bgcolor, rng);
    let spotcolor = resolve_fill(&options.spotcolor, rng);

    Ok(IconConfig {
        seed,
        size,
        scale,
        color,
        bgcolor,
        spotcolor,
    })
}

/// A lowercase hex seed for callers that supply none.
pub fn random_seed(entropy: &mut fastrand::Rng) -> String {
    format!("{:x}", entropy.u64(..RANDOM_SEED_BOUND))
}

fn validate_dimensions(size: Option<i64>, scale: Option<i64>) -> Result<(u32, u32)> {
    let size = match size {
        None => DEFAULT_SIZE,
        Some(size) if size <= 0 => return Err(BlockiesError::InvalidSize { size }),
        Some(size) => u32::try_from(size).map_err(|_| BlockiesError::CanvasTooLarge {
            size,
            scale: scale.unwrap_or(i64::from(DEFAULT_SCALE)),
        })?,
    };

    let scale = match scale {
        None => DEFAULT_SCALE,
        Some(scale) if scale <= 0 => return Err(BlockiesError::InvalidScale { scale }),
        Some(scale) => u32::try_from(scale).map_err(|_| BlockiesError::CanvasTooLarge {
            size: i64::from(size),
            scale,
        })?,
    };

    canvas_edge(size, scale)?;
    Ok((size, scale))
}

fn canvas_edge(size: u32, scale: u32) -> Result<u32> {
    size.checked_mul(scale)
        .filter(|&edge| edge <= MAX_CANVAS)
        .ok_or(BlockiesError::CanvasTooLarge {
            size: i64::from(size),
            scale: i64::from(scale),
        })
}

/// Empty strings count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn resolve_fill(value: &Option<String>, rng: &mut SeededRandom) -> Fill {
    match present(value) {
        Some(css) => Fill::Custom(css.to_string()),
        None => Fill::Generated(create_colour(rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::picker::DRAWS_PER_COLOUR;

    fn resolve(options: &IconOptions) -> (IconConfig, SeededRandom) {
        let mut rng = SeededRandom::default();
        let config = build_opts(options, &mut rng).unwrap();
        (config, rng)
    }

    #[test]
    fn test_defaults() {
        let (config, rng) = resolve(&IconOptions::new().with_seed("abc"));
        assert_eq!(config.seed, "abc");
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.scale, DEFAULT_SCALE);
        assert_eq!(config.canvas_size().unwrap(), 32);
        assert_eq!(rng.draws(), 3 * DRAWS_PER_COLOUR);
    }

    #[test]
    fn test_known_colours() {
        let (config, _) = resolve(&IconOptions::new().with_seed("abc"));
        assert_eq!(config.color.to_string(), "hsl(0,40.00017241574824%,9.530814399477094%)");
        assert_eq!(config.bgcolor.to_string(), "hsl(1,51.49004410021007%,9.734940156340599%)");
        assert_eq!(
            config.spotcolor.to_string(),
            "hsl(39,41.538067357614636%,34.337011782918125%)"
        );
    }

    #[test]
    fn test_custom_colour_skips_draws() {
        let (plain, plain_rng) = resolve(&IconOptions::new().with_seed("abc"));
        let (custom, custom_rng) = resolve(&IconOptions::new().with_seed("abc").with_color("red"));

        assert_eq!(custom.color, Fill::Custom("red".to_string()));
        assert_eq!(plain_rng.draws() - custom_rng.draws(), DRAWS_PER_COLOUR);

        // The first generated colour moves into the next slot
        assert_eq!(custom.bgcolor, plain.color);
        assert_eq!(custom.spotcolor, plain.bgcolor);
        assert_ne!(custom.bgcolor, plain.bgcolor);
    }

    #[test]
    fn test_custom_later_slot_keeps_earlier_colours() {
        let (plain, _) = resolve(&IconOptions::new().with_seed("abc"));
        let (custom, _) = resolve(&IconOptions::new().with_seed("abc").with_bgcolor("#000"));

        assert_eq!(custom.color, plain.color);
        assert_eq!(custom.bgcolor, Fill::Custom("#000".to_string()));
        assert_eq!(custom.spotcolor, plain.bgcolor);
    }

    #[test]
    fn test_all_custom_draws_nothing() {
        let options = IconOptions::new()
            .with_seed("abc")
            .with_color("red")
            .with_bgcolor("white")
            .with_spotcolor("blue");
        let (_, rng) = resolve(&options);
        assert_eq!(rng.draws(), 0);
        assert_eq!(rng.state(), SeededRandom::new("abc").state());
    }

    #[test]
    fn test_malformed_custom_colour_is_kept_verbatim() {
        let (config, _) = resolve(&IconOptions::new().with_seed("abc").with_color("bogus"));
        assert_eq!(config.color.to_string(), "bogus");
        assert!(config.color.to_colour().is_err());
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let (plain, _) = resolve(&IconOptions::new().with_seed("abc"));
        let (empty, _) = resolve(&IconOptions::new().with_seed("abc").with_color(""));
        assert_eq!(empty, plain);
    }

    #[test]
    fn test_random_seed_is_hex() {
        let mut entropy = fastrand::Rng::with_seed(7);
        let mut rng = SeededRandom::default();
        let config = build_opts_with(&IconOptions::new(), &mut rng, &mut entropy).unwrap();

        assert!(!config.seed.is_empty());
        assert!(config.seed.len() <= 14);
        assert!(config.seed.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        let mut expected = SeededRandom::new(&config.seed);
        for _ in 0..3 * DRAWS_PER_COLOUR {
            expected.next_f64();
        }
        assert_eq!(rng, expected);
    }

    #[test]
    fn test_random_seed_reproducible_with_same_entropy() {
        let a = random_seed(&mut fastrand::Rng::with_seed(42));
        let b = random_seed(&mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_size() {
        let mut rng = SeededRandom::default();
        for size in [0, -1, -100] {
            let err = build_opts(&IconOptions::new().with_size(size), &mut rng).unwrap_err();
            assert!(matches!(err, BlockiesError::InvalidSize { size: s } if s == size));
        }
    }

    #[test]
    fn test_invalid_scale() {
        let mut rng = SeededRandom::default();
        let err = build_opts(&IconOptions::new().with_scale(0), &mut rng).unwrap_err();
        assert!(matches!(err, BlockiesError::InvalidScale { scale: 0 }));
    }

    #[test]
    fn test_validation_happens_before_seeding() {
        let mut rng = SeededRandom::new("untouched");
        let before = rng;
        let options = IconOptions::new().with_seed("abc").with_size(-3);
        assert!(build_opts(&options, &mut rng).is_err());
        assert_eq!(rng, before);
    }

    #[test]
    fn test_canvas_too_large() {
        let mut rng = SeededRandom::default();
        let options = IconOptions::new().with_size(70_000).with_scale(70_000);
        let err = build_opts(&options, &mut rng).unwrap_err();
        assert!(matches!(err, BlockiesError::CanvasTooLarge { .. }));

        let options = IconOptions::new().with_size(i64::MAX);
        let err = build_opts(&options, &mut rng).unwrap_err();
        assert!(matches!(err, BlockiesError::CanvasTooLarge { .. }));
    }

    #[test]
    fn test_canvas_limit() {
        let max = i64::from(MAX_CANVAS);

        let mut rng = SeededRandom::new("untouched");
        let before = rng;
        let options = IconOptions::new().with_seed("abc").with_size(200_000).with_scale(1);
        let err = build_opts(&options, &mut rng).unwrap_err();
        assert!(matches!(err, BlockiesError::CanvasTooLarge { size: 200_000, scale: 1 }));
        assert_eq!(rng, before);

        let options = IconOptions::new().with_size(max / 4 + 1).with_scale(4);
        assert!(build_opts(&options, &mut rng).is_err());

        let options = IconOptions::new().with_seed("abc").with_size(max / 4).with_scale(4);
        let (config, _) = resolve(&options);
        assert_eq!(config.canvas_size().unwrap(), MAX_CANVAS);
    }

    #[test]
    fn test_hand_built_config_canvas_is_checked() {
        let (mut config, _) = resolve(&IconOptions::new().with_seed("abc"));
        config.size = u32::MAX;
        config.scale = 2;
        let err = config.canvas_size().unwrap_err();
        assert!(matches!(
            err,
            BlockiesError::CanvasTooLarge { size, scale: 2 } if size == i64::from(u32::MAX)
        ));

        config.size = MAX_CANVAS + 1;
        config.scale = 1;
        assert!(config.canvas_size().is_err());
    }

    #[test]
    fn test_or_fills_missing_fields() {
        let defaults = IconOptions::new().with_size(12).with_color("red");
        let merged = IconOptions::new().with_color("blue").or(&defaults);
        assert_eq!(merged.size, Some(12));
        assert_eq!(merged.color.as_deref(), Some("blue"));
        assert_eq!(merged.scale, None);
    }

    #[test]
    fn test_config_serializes_colours_as_strings() {
        let (config, _) = resolve(&IconOptions::new().with_seed("abc").with_color("red"));
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["color"], "red");
        assert_eq!(value["bgcolor"], "hsl(0,40.00017241574824%,9.530814399477094%)");
        assert_eq!(value["size"], 8);
    }
}
