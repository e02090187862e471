use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::use_cases::folder_materializer::{BatchFailure, FolderMaterializer};
use crate::application::use_cases::table_loader::TableLoader;
use crate::domain::error::{AppError, Result};
use crate::domain::grid::Grid;

/// Session context: the loaded table, where it came from, and the chosen destination.
///
/// Owned by a single front end; nothing here is shared across threads.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProcessorState {
    table_file: Option<PathBuf>,
    destination: Option<PathBuf>,
    grid: Grid,
}

impl ProcessorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_file(&self) -> Option<&Path> {
        self.table_file.as_deref()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Loads `path` and returns the number of rows read.
    ///
    /// On failure the previously loaded table and path are kept.
    pub fn load_file(&mut self, loader: &TableLoader, path: &Path) -> Result<usize> {
        let grid = loader.load(path)?;
        let rows = grid.row_count();
        self.grid = grid;
        self.table_file = Some(path.to_path_buf());
        Ok(rows)
    }

    pub fn set_destination(&mut self, path: impl Into<PathBuf>) {
        self.destination = Some(path.into());
    }

    /// Forgets the table file, destination and grid.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Runs the materializer over the loaded grid.
    ///
    /// Requires a loaded file, a destination and at least one row; a missing
    /// precondition is reported as a `ValidationError` with nothing created.
    pub fn generate(
        &self,
        materializer: &FolderMaterializer,
    ) -> std::result::Result<usize, BatchFailure> {
        let destination = self.check_ready().map_err(|error| BatchFailure { created: 0, error })?;
        materializer.generate(&self.grid, destination)
    }

    fn check_ready(&self) -> Result<&Path> {
        if self.table_file.is_none() {
            return Err(AppError::ValidationError("select a file first".to_string()));
        }
        let Some(destination) = self.destination.as_deref() else {
            return Err(AppError::ValidationError(
                "select a target path first".to_string(),
            ));
        };
        if self.grid.is_empty() {
            return Err(AppError::ValidationError("no available data".to_string()));
        }
        Ok(destination)
    }
}
