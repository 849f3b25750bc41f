use std::fs;
use std::path::{Path, PathBuf};

use super::error::BlockError;

/// Collects every file under `dir`, recursing into subdirectories.
///
/// Results are sorted by path so the leaf order, and therefore the sealed
/// root, is stable across filesystems and enumeration orders.
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, BlockError> {
    if !dir.is_dir() {
        return Err(BlockError::NotADirectory(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    walk(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), BlockError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}
