use crate::hasher::{HashAlgorithm, hash_file};
use crate::index::HashIndex;
use crate::util::paths::absolute_path;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Callback invoked once per input path, after that path has been handled.
///
/// Purely observational: implementations must not influence grouping order
/// or results. Failing paths are reported too.
pub trait ProgressObserver {
    fn file_processed(&self, path: &Path);
}

/// Observer for callers that do not track progress.
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn file_processed(&self, _path: &Path) {}
}

/// Groups the given file paths by content digest.
///
/// Equivalent to [`hash_batch_observed`] without progress reporting.
pub fn hash_batch(
    paths: &[PathBuf],
    algorithm: HashAlgorithm,
    buffer_size: NonZeroUsize,
    existing: Option<&HashIndex>,
) -> HashIndex {
    hash_batch_observed(paths, algorithm, buffer_size, existing, &NoProgress)
}

/// Groups the given file paths by content digest, reporting each processed
/// path to `observer`.
///
/// For each path in input order: if the prior index already records a digest
/// for its absolute form, that digest is reused without reading the file
/// (stored digests are trusted even if the content has since changed);
/// otherwise the file is hashed fresh. The absolute path is appended to the
/// group for the resulting digest. Paths that fail to hash are dropped from
/// the result without aborting the batch.
pub fn hash_batch_observed(
    paths: &[PathBuf],
    algorithm: HashAlgorithm,
    buffer_size: NonZeroUsize,
    existing: Option<&HashIndex>,
    observer: &dyn ProgressObserver,
) -> HashIndex {
    let known = existing.map(invert).unwrap_or_default();

    let mut groups = HashIndex::new();
    for path in paths {
        let abs = absolute_path(path);

        let digest = match known.get(&abs) {
            Some(digest) => {
                debug!("Reusing stored hash for {}", abs.display());
                Some(digest.clone())
            }
            None => hash_file(path, algorithm, buffer_size),
        };

        if let Some(digest) = digest {
            groups.append(digest, abs);
        }

        observer.file_processed(path);
    }

    groups
}

/// Inverts a digest-to-paths index into a path-to-digest lookup keyed by
/// absolute path.
///
/// Local to a single batch; never outlives the call that builds it. Empty
/// digest keys are degenerate stored values and contribute no entries, so
/// their paths get hashed fresh.
fn invert(index: &HashIndex) -> HashMap<PathBuf, String> {
    let mut known = HashMap::new();
    for (digest, paths) in index.iter() {
        if digest.is_empty() {
            continue;
        }
        for path in paths {
            known.insert(absolute_path(path), digest.clone());
        }
    }
    known
}
