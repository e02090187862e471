// ============================================================
// CSV TABLE READER
// ============================================================
// Read a CSV file into a ragged grid, no header row

use std::path::Path;

use csv::ReaderBuilder;

use crate::domain::error::{AppError, Result};
use crate::domain::grid::Grid;

const DELIMITER: u8 = b',';

/// CSV reader producing one grid row per record.
///
/// Rows keep their own field count; nothing is padded or trimmed.
#[derive(Default)]
pub struct CsvTableReader;

impl CsvTableReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path) -> Result<Grid> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.parse_bytes(&bytes)
    }

    /// Decodes as UTF-8 (BOM stripped, malformed sequences replaced) and parses.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Grid> {
        let (content, _, _) = encoding_rs::UTF_8.decode(bytes);
        self.parse_content(&content)
    }

    pub fn parse_content(&self, content: &str) -> Result<Grid> {
        check_quoting(content, DELIMITER as char)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Grid::new(rows))
    }
}

#[derive(Clone, Copy, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Rejects input the csv crate would silently accept: a quote inside an
/// unquoted field, text after a closing quote, and an unterminated quote.
fn check_quoting(content: &str, delimiter: char) -> Result<()> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1usize;
    let mut quote_line = 1usize;

    for c in content.chars() {
        state = match (state, c) {
            (QuoteState::Quoted, '"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, '"') => QuoteState::Quoted,
            (_, '\n') | (_, '\r') => QuoteState::FieldStart,
            (_, c) if c == delimiter => QuoteState::FieldStart,
            (QuoteState::FieldStart, '"') => {
                quote_line = line;
                QuoteState::Quoted
            }
            (QuoteState::Unquoted, '"') => {
                return Err(AppError::ParseError(format!(
                    "bare \" in non-quoted field on line {}",
                    line
                )));
            }
            (QuoteState::QuoteInQuoted, _) => {
                return Err(AppError::ParseError(format!(
                    "extraneous \" in quoted field on line {}",
                    line
                )));
            }
            _ => QuoteState::Unquoted,
        };
        if c == '\n' {
            line += 1;
        }
    }

    if state == QuoteState::Quoted {
        return Err(AppError::ParseError(format!(
            "unterminated quoted field starting on line {}",
            quote_line
        )));
    }
    Ok(())
}
