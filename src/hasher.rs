use clap::ValueEnum;
use md5::Md5;
use sha1::Sha1;
use sha2::digest::Output;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Default chunk size for file reads, in bytes.
pub const DEFAULT_BUFFER_SIZE: NonZeroUsize = NonZeroUsize::new(4096).unwrap();

/// The closed set of supported digest algorithms.
///
/// Anything outside this set is rejected at the argument-parsing boundary,
/// before any file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
enum HashFileError {
    #[error("{0} does not exist or is not a regular file")]
    NotAFile(PathBuf),
    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Computes the hex digest of a file's full content, reading it in chunks of
/// at most `buffer_size` bytes.
///
/// Returns `None` when the path is not an existing regular file or when any
/// I/O error occurs while opening or reading it. Failures are logged and
/// never abort a surrounding batch; only the affected file goes unreported.
pub fn hash_file(
    path: &Path,
    algorithm: HashAlgorithm,
    buffer_size: NonZeroUsize,
) -> Option<String> {
    match digest_file(path, algorithm, buffer_size) {
        Ok(digest) => {
            debug!("{} of {} is {}", algorithm, path.display(), digest);
            Some(digest)
        }
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

fn digest_file(
    path: &Path,
    algorithm: HashAlgorithm,
    buffer_size: NonZeroUsize,
) -> Result<String, HashFileError> {
    // Path::is_file would swallow the distinction between "missing" and
    // "unreadable metadata"; both converge to NotAFile, matching the
    // single no-result contract.
    let metadata =
        std::fs::metadata(path).map_err(|_| HashFileError::NotAFile(path.to_path_buf()))?;
    if !metadata.is_file() {
        return Err(HashFileError::NotAFile(path.to_path_buf()));
    }

    let io_error = |source| HashFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_error)?;

    let digest = match algorithm {
        HashAlgorithm::Md5 => {
            format!(
                "{:x}",
                stream_digest::<Md5>(&mut file, buffer_size).map_err(io_error)?
            )
        }
        HashAlgorithm::Sha1 => {
            format!(
                "{:x}",
                stream_digest::<Sha1>(&mut file, buffer_size).map_err(io_error)?
            )
        }
        HashAlgorithm::Sha256 => {
            format!(
                "{:x}",
                stream_digest::<Sha256>(&mut file, buffer_size).map_err(io_error)?
            )
        }
        HashAlgorithm::Sha512 => {
            format!(
                "{:x}",
                stream_digest::<Sha512>(&mut file, buffer_size).map_err(io_error)?
            )
        }
    };

    Ok(digest)
}

/// Streams a reader through a hasher in `buffer_size` chunks.
///
/// Chunk size affects only read granularity: the digest over the same byte
/// stream is identical for every buffer size.
fn stream_digest<D: Digest>(
    reader: &mut impl Read,
    buffer_size: NonZeroUsize,
) -> std::io::Result<Output<D>> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; buffer_size.get()];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize())
}
