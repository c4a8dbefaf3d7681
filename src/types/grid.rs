//! Pixel grid for generated icons.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single icon cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Left as background colour.
    Background = 0,
    /// Painted with the primary colour.
    Primary = 1,
    /// Painted with the spot colour.
    Spot = 2,
}

impl Cell {
    /// Convert a raw cell value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Background),
            1 => Some(Cell::Primary),
            2 => Some(Cell::Spot),
            _ => None,
        }
    }

    /// The raw cell value (0, 1 or 2).
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// A square, row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl PixelGrid {
    /// Build a grid from row-major cells.
    ///
    /// Returns `None` unless `cells.len() == size * size`.
    pub fn new(size: usize, cells: Vec<Cell>) -> Option<Self> {
        (size.checked_mul(size) == Some(cells.len())).then_some(Self { size, cells })
    }

    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells.get(y * self.size + x).copied()
    }

    /// Flat row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Check that every row reads the same in both directions.
    pub fn is_mirrored(&self) -> bool {
        self.rows().all(|row| row.iter().eq(row.iter().rev()))
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.value())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: usize, values: &[u8]) -> PixelGrid {
        let cells = values.iter().map(|&v| Cell::from_value(v).unwrap()).collect();
        PixelGrid::new(size, cells).unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(PixelGrid::new(2, vec![Cell::Background; 3]).is_none());
        assert!(PixelGrid::new(2, vec![Cell::Background; 4]).is_some());
    }

    #[test]
    fn test_get() {
        let g = grid(2, &[0, 1, 2, 0]);
        assert_eq!(g.get(1, 0), Some(Cell::Primary));
        assert_eq!(g.get(0, 1), Some(Cell::Spot));
        assert_eq!(g.get(2, 0), None);
    }

    #[test]
    fn test_is_mirrored() {
        assert!(grid(3, &[1, 0, 1, 2, 2, 2, 0, 1, 0]).is_mirrored());
        assert!(!grid(2, &[1, 0, 0, 0]).is_mirrored());
    }

    #[test]
    fn test_display() {
        let g = grid(2, &[0, 1, 2, 0]);
        assert_eq!(g.to_string(), "01\n20");
    }

    #[test]
    fn test_cell_values() {
        assert_eq!(Cell::Spot.value(), 2);
        assert_eq!(Cell::from_value(3), None);
    }

    #[test]
    fn test_serialize() {
        let g = grid(2, &[0, 1, 2, 1]);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"size":2,"cells":[0,1,2,1]}"#);
    }
}
