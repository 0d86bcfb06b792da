use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not a valid hash index: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize hash index: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Mapping from hex digest to the file paths sharing that content digest.
///
/// Serializes transparently as a JSON object keyed by digest, so the output
/// of one run can be fed back as prior-hash input to a later run. A
/// `BTreeMap` keeps digest keys sorted for stable output; path lists keep
/// insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashIndex {
    groups: BTreeMap<String, Vec<PathBuf>>,
}

impl HashIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path to the group for `digest`, creating the group if this
    /// is the first path carrying that digest.
    pub fn append(&mut self, digest: String, path: PathBuf) {
        self.groups.entry(digest).or_default().push(path);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<PathBuf>)> {
        self.groups.iter()
    }

    /// Number of distinct digests.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Merges another index into this one. Later entries win when the same
    /// digest key appears in both.
    pub fn merge(&mut self, other: HashIndex) {
        self.groups.extend(other.groups);
    }

    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| IndexError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Saves the index to `path` atomically.
    ///
    /// Writes to a temporary file in the target directory, fsyncs it, then
    /// renames it into place.
    pub fn save(&self, path: &Path) -> Result<(), IndexError> {
        use std::io::Write;

        let content = self.to_json_pretty()?;
        let parent = path.parent().unwrap_or(Path::new("."));

        let io_error = |source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(io_error)?;
        temp_file.write_all(content.as_bytes()).map_err(io_error)?;
        temp_file.as_file().sync_all().map_err(io_error)?;
        temp_file.persist(path).map_err(|e| io_error(e.error))?;

        Ok(())
    }
}
