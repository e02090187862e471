use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Table file formats the loader understands, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableFormat {
    Csv,
    Xlsx,
}

impl TableFormat {
    /// Detects the format from the lowercased extension of `path`.
    ///
    /// Fails with `UnsupportedFormat` carrying the extension (with its leading
    /// dot, empty when there is none).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        match ext.as_str() {
            ".csv" => Ok(TableFormat::Csv),
            ".xlsx" => Ok(TableFormat::Xlsx),
            _ => Err(AppError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_case_insensitively() {
        assert_eq!(
            TableFormat::from_path(Path::new("plan.CSV")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("/tmp/a.b/plan.XlSx")).unwrap(),
            TableFormat::Xlsx
        );
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert_eq!(
            TableFormat::from_path(Path::new("plan.xls")),
            Err(AppError::UnsupportedFormat(".xls".to_string()))
        );
        assert_eq!(
            TableFormat::from_path(Path::new("README")),
            Err(AppError::UnsupportedFormat(String::new()))
        );
    }
}
