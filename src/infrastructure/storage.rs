use std::fs;
use std::path::{is_separator, Path, PathBuf};

/// Joins a table cell onto `parent` as a single child path.
///
/// Leading separators are stripped so a cell such as `/Reports` stays under
/// `parent` instead of replacing it.
pub fn child_path(parent: &Path, name: &str) -> PathBuf {
    parent.join(name.trim_start_matches(is_separator))
}

/// Creates `path` and any missing parents. An existing directory is not an error.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
