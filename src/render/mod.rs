//! Rendering module for blockies.
//!
//! Paints generated icons onto a [`Surface`]: the background first, then one
//! `scale` x `scale` block per non-background cell.

mod png;
mod surface;

pub use png::{encode_png, write_png};
pub use surface::Surface;

use image::RgbaImage;

use crate::error::{BlockiesError, Result};
use crate::generate::{generate, Icon, IconOptions};
use crate::types::Cell;

/// Paint `icon` onto `surface`.
///
/// Colours and canvas size are checked before the surface is touched, so a
/// malformed custom colour or an oversized canvas leaves it as it was.
pub fn paint<S: Surface + ?Sized>(icon: &Icon, surface: &mut S) -> Result<()> {
    let config = &icon.config;
    let color = config.color.to_colour()?;
    let bgcolor = config.bgcolor.to_colour()?;
    let spotcolor = config.spotcolor.to_colour()?;

    let scale = config.scale;
    let canvas = config.canvas_size()?;

    if icon.pixels.size() != config.size as usize {
        return Err(BlockiesError::Render {
            message: format!(
                "Pattern is {0}x{0} cells but the config says {1}x{1}",
                icon.pixels.size(),
                config.size
            ),
            help: None,
        });
    }

    surface.resize(canvas, canvas);
    surface.fill_rect(0, 0, canvas, canvas, bgcolor);

    for (row, cells) in icon.pixels.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let fill = match cell {
                Cell::Background => continue,
                Cell::Primary => color,
                Cell::Spot => spotcolor,
            };

            // col, row < size and size * scale <= MAX_CANVAS
            let (x, y) = (col as u32 * scale, row as u32 * scale);
            surface.fill_rect(x, y, scale, scale, fill);
        }
    }

    Ok(())
}

/// Generate an icon from `options` and paint it onto `surface`.
pub fn render<S: Surface + ?Sized>(options: &IconOptions, surface: &mut S) -> Result<Icon> {
    let icon = generate(options)?;
    paint(&icon, surface)?;
    Ok(icon)
}

/// Generate an icon from `options` into a new image.
pub fn create(options: &IconOptions) -> Result<RgbaImage> {
    let mut image = RgbaImage::new(0, 0);
    render(options, &mut image)?;
    Ok(image)
}
