use crate::domain::grid::Grid;
use crate::domain::theme::ThemeConfig;

/// Width of each column: widest cell plus padding, never below the theme minimum.
pub fn column_widths(grid: &Grid, theme: &ThemeConfig) -> Vec<usize> {
    (0..grid.column_count())
        .map(|col| {
            let widest = grid
                .rows()
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            (widest + theme.column_padding).max(theme.min_column_width)
        })
        .collect()
}

/// Renders the grid as fixed-width text, one line per row, columns split by `|`.
pub fn render(grid: &Grid, theme: &ThemeConfig) -> String {
    let widths = column_widths(grid, theme);
    let mut out = String::new();

    for row in grid.rows() {
        let line = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = *width)
            })
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(min_column_width: usize, column_padding: usize) -> ThemeConfig {
        ThemeConfig {
            min_column_width,
            column_padding,
            ..Default::default()
        }
    }

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_column_widths() {
        let g = grid(&[&["A", "longer"], &["bb"]]);
        assert_eq!(column_widths(&g, &theme(3, 1)), vec![3, 7]);
        assert_eq!(column_widths(&g, &theme(10, 1)), vec![10, 10]);
    }

    #[test]
    fn test_render_ragged_rows() {
        let g = grid(&[&["A", "longer"], &["bb"]]);
        assert_eq!(render(&g, &theme(3, 1)), "A  |longer\nbb |\n");
    }

    #[test]
    fn test_widths_count_characters_not_bytes() {
        let g = grid(&[&["Überblick"]]);
        assert_eq!(column_widths(&g, &theme(1, 0)), vec![9]);
    }

    #[test]
    fn test_render_empty_grid() {
        assert_eq!(render(&Grid::default(), &ThemeConfig::default()), "");
    }
}
