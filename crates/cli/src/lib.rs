use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod commands;

/// Recursively collect `*.a` files under `dir`, sorted by path.
///
/// Sorting gives the merge a stable candidate order regardless of directory
/// iteration order, which keeps output archives reproducible across runs and
/// filesystems.
pub fn collect_archive_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_into(dir, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect_into(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_into(&path, found)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("a") {
            found.push(path);
        }
    }
    Ok(())
}
