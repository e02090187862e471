// ============================================================
// TABLE INFRASTRUCTURE LAYER
// ============================================================
// File readers turning CSV and XLSX files into grids

mod csv_reader;
mod xlsx_reader;

pub use csv_reader::CsvTableReader;
pub use xlsx_reader::XlsxTableReader;
