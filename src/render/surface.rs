//! Drawing surfaces.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::types::Colour;

/// Something an icon can be painted onto.
///
/// Painting only needs a resize and solid rectangle fills. Fills that
/// extend past the surface edge are clipped.
pub trait Surface {
    /// Resize to `width` x `height`, discarding existing content.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill a rectangle with a solid colour.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour);
}

impl Surface for RgbaImage {
    fn resize(&mut self, width: u32, height: u32) {
        *self = ImageBuffer::new(width, height);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        let rgba = Rgba(colour.to_rgba());

        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());

        for py in y..y_end {
            for px in x..x_end {
                self.put_pixel(px, py, rgba);
            }
        }
    }
}
