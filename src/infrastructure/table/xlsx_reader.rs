use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, DataType, Range, Reader, Xlsx};
use chrono::{NaiveDateTime, Timelike};

use crate::domain::error::{AppError, Result};
use crate::domain::grid::Grid;

/// Reads the first worksheet of an `.xlsx` workbook into a rectangular grid.
#[derive(Default)]
pub struct XlsxTableReader;

impl XlsxTableReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path) -> Result<Grid> {
        let file = File::open(path).map_err(|e| {
            AppError::IoError(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut workbook: Xlsx<_> = Xlsx::new(BufReader::new(file))
            .map_err(|e| AppError::ParseError(format!("Failed to open Excel file: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::ParseError("did not find any sheets in the file".to_string()))?
            .map_err(|e| AppError::ParseError(format!("Failed to read Excel range: {}", e)))?;

        Ok(range_to_grid(&range))
    }
}

/// Converts a worksheet range to a grid anchored at A1, padded to the widest row.
fn range_to_grid(range: &Range<Data>) -> Grid {
    // calamine ranges start at the first used cell, not at A1
    let (row_offset, col_offset) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![String::new(); col_offset];
        cells.extend(row.iter().map(cell_to_string));
        rows.push(cells);
    }

    let mut grid = Grid::new(rows);
    grid.pad_to_widest();
    grid
}

/// Renders a cell the way the sheet displays it: dates as dates, booleans as
/// `TRUE`/`FALSE`, numbers without a trailing `.0`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(datetime) => format_datetime(&datetime),
            None => format!("{}", cell),
        },
        _ => cell
            .as_string()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("{}", cell)),
    }
}

fn format_datetime(datetime: &NaiveDateTime) -> String {
    if datetime.time().num_seconds_from_midnight() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
