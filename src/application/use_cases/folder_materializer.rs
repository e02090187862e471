// ============================================================
// FOLDER MATERIALIZER USE CASE
// ============================================================
// Turn grid rows into level-1 folders and their direct children

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::{AppError, Result};
use crate::domain::grid::Grid;
use crate::infrastructure::storage::{child_path, ensure_dir};

/// A batch that stopped at its first failed create.
///
/// Folders created before the failure stay on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    /// Folders created before the failure
    pub created: usize,
    pub error: AppError,
}

impl fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (after {} folder(s) created)", self.error, self.created)
    }
}

impl std::error::Error for BatchFailure {}

impl From<BatchFailure> for AppError {
    fn from(failure: BatchFailure) -> Self {
        failure.error
    }
}

#[derive(Default)]
pub struct FolderMaterializer;

impl FolderMaterializer {
    pub fn new() -> Self {
        Self
    }

    /// Creates one folder per non-blank cell and returns how many were created
    /// (existing folders count as created).
    ///
    /// Column 0 names the level-1 folder under `dest_root`; every later
    /// non-blank cell becomes a direct child of it. Rows with a blank first
    /// cell are skipped, as are blank cells further along a row.
    pub fn generate(&self, grid: &Grid, dest_root: &Path) -> std::result::Result<usize, BatchFailure> {
        let mut created = 0;

        for row in grid.rows() {
            let Some(top) = row.first().map(|cell| cell.trim()).filter(|cell| !cell.is_empty())
            else {
                continue;
            };

            let level1 = create_named_dir(dest_root, top)
                .map_err(|error| BatchFailure { created, error })?;
            created += 1;

            for cell in &row[1..] {
                let name = cell.trim();
                if name.is_empty() {
                    continue;
                }
                create_named_dir(&level1, name)
                    .map_err(|error| BatchFailure { created, error })?;
                created += 1;
            }
        }

        Ok(created)
    }
}

fn create_named_dir(parent: &Path, name: &str) -> Result<PathBuf> {
    let path = child_path(parent, name);
    ensure_dir(&path).map_err(|e| AppError::directory_create(name, &e))?;
    Ok(path)
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
    fn test_children_hang_off_the_level1_folder() {
        let dest = tempfile::tempdir().unwrap();
        let g = grid(&[&["A", "x", "y"], &["", "z"], &["B"]]);

        let created = FolderMaterializer::new().generate(&g, dest.path()).unwrap();

        assert_eq!(created, 4);
        assert!(dest.path().join("A").is_dir());
        assert!(dest.path().join("A").join("x").is_dir());
        assert!(dest.path().join("A").join("y").is_dir());
        assert!(!dest.path().join("A").join("x").join("y").exists());
        assert!(dest.path().join("B").is_dir());
        assert!(!dest.path().join("z").exists());
    }

    #[test]
    fn test_blank_middle_cell_does_not_truncate_row() {
        let dest = tempfile::tempdir().unwrap();
        let g = grid(&[&["A", "", "  ", "y"]]);

        let created = FolderMaterializer::new().generate(&g, dest.path()).unwrap();

        assert_eq!(created, 2);
        assert!(dest.path().join("A").join("y").is_dir());
    }

    #[test]
    fn test_whitespace_rows_are_skipped_and_names_trimmed() {
        let dest = tempfile::tempdir().unwrap();
        let g = grid(&[&[], &["  ", "orphan"], &["\tTop ", " child\t"]]);

        let created = FolderMaterializer::new().generate(&g, dest.path()).unwrap();

        assert_eq!(created, 2);
        assert!(dest.path().join("Top").join("child").is_dir());
        assert!(!dest.path().join("orphan").exists());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dest = tempfile::tempdir().unwrap();
        let g = grid(&[&["A", "x", "y"], &["B"]]);
        let materializer = FolderMaterializer::new();

        let first = materializer.generate(&g, dest.path()).unwrap();
        let second = materializer.generate(&g, dest.path()).unwrap();

        assert_eq!(first, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_failure_keeps_earlier_folders() {
        let dest = tempfile::tempdir().unwrap();
        std::fs::create_dir(dest.path().join("A")).unwrap();
        std::fs::write(dest.path().join("A").join("x"), b"not a folder").unwrap();
        let g = grid(&[&["A", "x", "y"], &["B"]]);

        let failure = FolderMaterializer::new()
            .generate(&g, dest.path())
            .unwrap_err();

        assert_eq!(failure.created, 1);
        assert!(matches!(
            &failure.error,
            AppError::DirectoryCreate { name, .. } if name == "x"
        ));
        assert!(dest.path().join("A").is_dir());
        assert!(!dest.path().join("A").join("y").exists());
        assert!(!dest.path().join("B").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_illegal_child_name_fails_without_rollback() {
        let dest = tempfile::tempdir().unwrap();
        let g = grid(&[&["A", "bad\0name"]]);

        let failure = FolderMaterializer::new()
            .generate(&g, dest.path())
            .unwrap_err();

        assert_eq!(failure.created, 1);
        assert!(matches!(
            &failure.error,
            AppError::DirectoryCreate { name, .. } if name == "bad\0name"
        ));
        assert!(dest.path().join("A").is_dir());
    }

    #[test]
    fn test_level1_failure_reports_zero() {
        let dest = tempfile::tempdir().unwrap();
        std::fs::write(dest.path().join("A"), b"").unwrap();
        let g = grid(&[&["A", "x"]]);

        let failure = FolderMaterializer::new()
            .generate(&g, dest.path())
            .unwrap_err();

        assert_eq!(failure.created, 0);
        assert_eq!(
            AppError::from(failure.clone()).to_string(),
            failure.error.to_string()
        );
    }

    #[test]
    fn test_leading_separator_stays_under_destination() {
        let dest = tempfile::tempdir().unwrap();
        let g = grid(&[&["/Top", "/child"]]);

        FolderMaterializer::new().generate(&g, dest.path()).unwrap();

        assert!(dest.path().join("Top").join("child").is_dir());
    }

    #[test]
    fn test_empty_grid_creates_nothing() {
        let dest = tempfile::tempdir().unwrap();
        let created = FolderMaterializer::new()
            .generate(&Grid::default(), dest.path())
            .unwrap();
        assert_eq!(created, 0);
    }
}
