use std::path::Path;

use crate::domain::error::Result;
use crate::domain::grid::Grid;
use crate::domain::table_format::TableFormat;
use crate::infrastructure::table::{CsvTableReader, XlsxTableReader};

/// Loads a table file into a [`Grid`], dispatching on the file extension.
#[derive(Default)]
pub struct TableLoader {
    csv: CsvTableReader,
    xlsx: XlsxTableReader,
}

impl TableLoader {
    /// `.csv` rows keep their own length; `.xlsx` rows are padded to the
    /// widest row. Any other extension fails before the file is opened.
    pub fn load(&self, path: &Path) -> Result<Grid> {
        match TableFormat::from_path(path)? {
            TableFormat::Csv => self.csv.read_file(path),
            TableFormat::Xlsx => self.xlsx.read_file(path),
        }
    }
}
