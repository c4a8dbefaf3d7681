//! Mirrored pattern generator.

use crate::random::SeededRandom;
use crate::types::{Cell, PixelGrid};

/// Fill a `size` x `size` grid from `rng`.
///
/// Each row draws its left half (rounded up) and mirrors it onto the right.
/// Cells come from `floor(next * 2.3)`: background and primary are each
/// drawn with probability 1/2.3, spot with the remaining 0.3/2.3.
pub fn create_image_data(rng: &mut SeededRandom, size: usize) -> PixelGrid {
    let data_width = size.div_ceil(2);
    let mirror_width = size - data_width;

    let mut cells = Vec::with_capacity(size * size);
    let mut row = Vec::with_capacity(size);

    for _ in 0..size {
        row.clear();
        row.extend((0..data_width).map(|_| draw_cell(rng)));
        row.extend_from_within(..mirror_width);
        row[data_width..].reverse();

        cells.extend_from_slice(&row);
    }

    PixelGrid::from_cells(size, cells)
}

fn draw_cell(rng: &mut SeededRandom) -> Cell {
    match (rng.next_f64() * 2.3).floor() as u8 {
        0 => Cell::Background,
        1 => Cell::Primary,
        _ => Cell::Spot,
    }
}
