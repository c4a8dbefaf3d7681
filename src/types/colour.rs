//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{BlockiesError, Result};

use super::hsl::hsl_to_colour;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// CSS basic colour keywords.
const NAMED: &[(&str, Colour)] = &[
    ("black", Colour::rgb(0, 0, 0)),
    ("silver", Colour::rgb(192, 192, 192)),
    ("gray", Colour::rgb(128, 128, 128)),
    ("grey", Colour::rgb(128, 128, 128)),
    ("white", Colour::rgb(255, 255, 255)),
    ("maroon", Colour::rgb(128, 0, 0)),
    ("red", Colour::rgb(255, 0, 0)),
    ("purple", Colour::rgb(128, 0, 128)),
    ("fuchsia", Colour::rgb(255, 0, 255)),
    ("magenta", Colour::rgb(255, 0, 255)),
    ("green", Colour::rgb(0, 128, 0)),
    ("lime", Colour::rgb(0, 255, 0)),
    ("olive", Colour::rgb(128, 128, 0)),
    ("yellow", Colour::rgb(255, 255, 0)),
    ("navy", Colour::rgb(0, 0, 128)),
    ("blue", Colour::rgb(0, 0, 255)),
    ("teal", Colour::rgb(0, 128, 128)),
    ("aqua", Colour::rgb(0, 255, 255)),
    ("cyan", Colour::rgb(0, 255, 255)),
    ("orange", Colour::rgb(255, 165, 0)),
];

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a CSS-style colour string.
    ///
    /// Supports hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`), `rgb(r,g,b)`,
    /// `hsl(h,s%,l%)` and the CSS basic colour keywords.
    pub fn parse_css(s: &str) -> Result<Self> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        if lower.starts_with('#') {
            return Self::from_hex(s);
        }
        if let Some(args) = function_args(&lower, "hsl") {
            return parse_hsl_args(s, args);
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return parse_rgb_args(s, args);
        }
        if let Some((_, colour)) = NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*colour);
        }

        Err(BlockiesError::Parse {
            message: format!("Unrecognised colour: {}", s),
            help: Some("Use #RRGGBB, rgb(r,g,b), hsl(h,s%,l%) or a CSS colour name".to_string()),
        })
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let digits = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<Vec<u8>>>()?;

        match digits.as_slice() {
            // #RGB -> #RRGGBB
            &[r, g, b] => Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            // #RGBA -> #RRGGBBAA
            &[r, g, b, a] => Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)),
            &[r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2)),
            &[r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::new(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
                a1 << 4 | a2,
            )),
            _ => Err(BlockiesError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for Colour {
    type Err = BlockiesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_css(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Return the argument list of `name(...)`, if `s` is that call.
fn function_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = s.strip_prefix(name)?.trim_start();
    let inner = inner.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_hsl_args(source: &str, args: Vec<&str>) -> Result<Colour> {
    let [h, s, l] = args.as_slice() else {
        return Err(arity_error(source, "hsl(h,s%,l%)"));
    };

    let hue = parse_number(source, h.trim_end_matches("deg"))?;
    let saturation = parse_number(source, s.trim_end_matches('%'))?;
    let lightness = parse_number(source, l.trim_end_matches('%'))?;

    Ok(hsl_to_colour(hue, saturation, lightness))
}

fn parse_rgb_args(source: &str, args: Vec<&str>) -> Result<Colour> {
    let [r, g, b] = args.as_slice() else {
        return Err(arity_error(source, "rgb(r,g,b)"));
    };

    let channel = |arg: &str| -> Result<u8> {
        let value = parse_number(source, arg)?;
        Ok(value.round().clamp(0.0, 255.0) as u8)
    };

    Ok(Colour::rgb(channel(*r)?, channel(*g)?, channel(*b)?))
}

fn parse_number(source: &str, arg: &str) -> Result<f64> {
    arg.trim().parse::<f64>().map_err(|_| BlockiesError::Parse {
        message: format!("Invalid number '{}' in colour: {}", arg, source),
        help: None,
    })
}

fn arity_error(source: &str, usage: &str) -> BlockiesError {
    BlockiesError::Parse {
        message: format!("Wrong number of components in colour: {}", source),
        help: Some(format!("Usage: {}", usage)),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| BlockiesError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}
