//! Directory scanning for `.pkg` files.

use std::path::{Path, PathBuf};

/// Subdirectory the executor copies originals into before renaming.
pub const BACKUP_DIR_NAME: &str = "backup_before_rename";

/// Collect the top-level `.pkg` files in a directory, sorted by path so
/// plans are deterministic.
///
/// Subdirectories are not descended into, which also keeps a previous run's
/// backup folder out of the plan.
pub fn scan_pkg_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_pkg_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

fn has_pkg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pkg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_finds_only_pkg_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.pkg"), b"").unwrap();
        fs::write(dir.path().join("a.PKG"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join(BACKUP_DIR_NAME)).unwrap();
        fs::write(dir.path().join(BACKUP_DIR_NAME).join("old.pkg"), b"").unwrap();

        let files = scan_pkg_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.PKG", "b.pkg"]);
    }
}
