
use crate::runner::BuildError;
use log::trace;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every regular file under `root` whose name ends with `extension`,
/// sorted by path.
///
/// Symlinks are never followed: a linked directory is not descended into and
/// a linked file is not reported.
pub fn find_sources(root: &Path, extension: &str) -> Result<Vec<PathBuf>, BuildError> {
    let mut files = find_sources_unsorted(root, extension)?;
    files.sort();
    Ok(files)
}

/// Same as [`find_sources`], but keeps the order the filesystem listed
/// entries in.
pub fn find_sources_unsorted(root: &Path, extension: &str) -> Result<Vec<PathBuf>, BuildError> {
    if extension.is_empty() {
        return Err(BuildError::InvalidConfig(
            "source extension must not be empty".to_string(),
        ));
    }

    let metadata = fs::metadata(root).map_err(|source| BuildError::Filesystem {
        path: root.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(BuildError::Filesystem {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "source root is not a directory"),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;

        if !entry.file_type().is_file() {
            if !entry.file_type().is_dir() {
                trace!("Skipping non-regular entry {}", entry.path().display());
            }
            continue;
        }

        if has_suffix(entry.path(), extension) {
            files.push(entry.into_path());
        } else {
            trace!("Skipping {}", entry.path().display());
        }
    }

    Ok(files)
}

fn has_suffix(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}
