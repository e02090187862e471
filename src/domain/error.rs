use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    UnsupportedFormat(String),
    IoError(String),
    ParseError(String),
    DirectoryCreate { name: String, cause: String },
    ValidationError(String),
    ConfigError(String),
}

impl AppError {
    /// Builds a `DirectoryCreate` error from the cell that could not become a folder.
    pub fn directory_create(name: &str, cause: &std::io::Error) -> Self {
        AppError::DirectoryCreate {
            name: name.to_string(),
            cause: cause.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnsupportedFormat(ext) => write!(f, "File not supported: {}", ext),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::DirectoryCreate { name, cause } => {
                write!(f, "Failed to create {}: {}", name, cause)
            }
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            AppError::IoError(err.to_string())
        } else {
            AppError::ParseError(err.to_string())
        }
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
