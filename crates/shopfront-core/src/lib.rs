//! Shared plumbing for state persisted by the shopfront SDK.
//!
//! State aggregates are stored as JSON blobs that are replaced wholesale on
//! every write, so the helpers here make the replacement atomic and gate it
//! on a filesystem lock.

mod version;

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use fslock::LockFile;
use serde::Serialize;
pub use version::Version;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("state file stored in an invalid location: {0}")]
    InvalidLocation(PathBuf),
    #[error("failed to open temporary state file")]
    OpenTmpFile(#[source] std::io::Error),
    #[error("failed to rename temporary state file")]
    RenameTmpFile(#[source] tempfile::PersistError),
    #[error("failed to write temporary state file")]
    WriteTmpFile(#[source] serde_json::Error),
}

/// Serialize a value and replace the blob at `path` with it atomically.
///
/// The value is first written to a temporary file in the same directory and
/// then renamed over `path`. The [LockFile] argument ensures the replacement
/// only happens while the lock is held; it is a bug to pass a [LockFile]
/// that doesn't correspond to `path`, as that bypasses the lock entirely.
/// `path` must have a parent directory.
pub fn persist_atomically<T>(
    value: &T,
    path: &impl AsRef<Path>,
    _lock: LockFile,
) -> Result<(), PersistError>
where
    T: ?Sized + Serialize,
{
    let parent = path.as_ref().parent().ok_or(
        // `path` would have to be empty, `/`, or `.` to get here
        PersistError::InvalidLocation(path.as_ref().to_path_buf()),
    )?;
    let temp_file = tempfile::NamedTempFile::new_in(parent).map_err(PersistError::OpenTmpFile)?;

    let writer = BufWriter::new(&temp_file);
    serde_json::to_writer_pretty(writer, value).map_err(PersistError::WriteTmpFile)?;
    temp_file
        .persist(path.as_ref())
        .map_err(PersistError::RenameTmpFile)?;
    Ok(())
}

/// Returns a `tracing`-compatible form of a [Path]
pub fn traceable_path(p: impl AsRef<Path>) -> impl tracing::Value {
    let path = p.as_ref();
    path.display().to_string()
}
