use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use walkdir::WalkDir;

/// A routing directory as found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Missing,
    /// The name exists but is a regular file; it holds no routes.
    File,
    Directory,
}

impl DirStatus {
    /// Treats a directory or a file at `path` as present.
    ///
    /// Symlinks are followed; a dangling link counts as missing.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => DirStatus::Directory,
            Ok(meta) if meta.is_file() => DirStatus::File,
            _ => DirStatus::Missing,
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, DirStatus::Missing)
    }
}

/// Lists every regular file under `dir`, in depth-first order with entries
/// sorted by name.
///
/// Missing directories, and paths that are files rather than directories,
/// yield nothing. Any error while walking is returned, including symlink
/// loops.
pub fn scan_files(dir: &Path, verbose: bool) -> Result<Vec<PathBuf>> {
    match DirStatus::of(dir) {
        DirStatus::Missing => {
            if verbose {
                eprintln!(
                    "{} No {} directory, skipping",
                    "note:".bold().cyan(),
                    dir.display()
                );
            }
            return Ok(Vec::new());
        }
        DirStatus::File => {
            if verbose {
                eprintln!(
                    "{} {} is a file, not a directory; no routes collected from it",
                    "warning:".bold().yellow(),
                    dir.display()
                );
            }
            return Ok(Vec::new());
        }
        DirStatus::Directory => {}
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(dir).display().to_string();
                return Err(err).with_context(|| format!("Failed to read directory: {}", path));
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
