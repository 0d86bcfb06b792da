use std::path::PathBuf;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("{0} is not a valid file or directory path")]
    InvalidPath(PathBuf),
}

/// Flattens file and directory arguments into a list of candidate files.
///
/// Files are taken as-is; directories are walked recursively with entries in
/// sorted order so repeated runs see the same sequence. Entries that cannot
/// be read mid-walk are skipped with a warning. An argument that is neither
/// an existing file nor a directory fails the whole command before any
/// hashing starts.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, DiscoverError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                    Ok(_) => {}
                    Err(err) => warn!("Skipping unreadable entry: {err}"),
                }
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(DiscoverError::InvalidPath(path.clone()));
        }
    }

    Ok(files)
}
