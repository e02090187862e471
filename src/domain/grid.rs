// ============================================================
// GRID
// ============================================================
// Rows x columns of string cells loaded from a table file

use serde::{Deserialize, Serialize};

/// A loaded table. Row 0 is data, not a header.
///
/// Rows may be ragged (CSV keeps the source shape); spreadsheet loads are
/// padded with [`Grid::pad_to_widest`] so every row has the same width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Right-pads every row with empty cells up to the widest row.
    pub fn pad_to_widest(&mut self) {
        let width = self.column_count();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_column_count_uses_widest_row() {
        let g = grid(&[&["a"], &["b", "c", "d"], &[]]);
        assert_eq!(g.row_count(), 3);
        assert_eq!(g.column_count(), 3);
    }

    #[test]
    fn test_pad_to_widest() {
        let mut g = grid(&[&["a"], &["b", "c", "d"], &[]]);
        g.pad_to_widest();
        assert!(g.rows().iter().all(|row| row.len() == 3));
        assert_eq!(g.rows()[0], vec!["a", "", ""]);
        assert_eq!(g.rows()[2], vec!["", "", ""]);
    }

    #[test]
    fn test_empty_grid() {
        let mut g = Grid::default();
        g.pad_to_widest();
        assert!(g.is_empty());
        assert_eq!(g.column_count(), 0);
    }
}
