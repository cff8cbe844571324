//! Scratch snapshot of the live history database.
//!
//! Firefox keeps `places.sqlite` locked while running, so the tool never
//! reads the live file: it streams a byte-for-byte copy to a scratch path
//! and queries that instead. The copy is owned by a [`Snapshot`] guard whose
//! `Drop` removes the file, so every exit path (including a failure after a
//! partial copy) leaves no snapshot behind.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::SnapshotError;

/// RAII guard over the scratch copy. Removing the file is tied to `Drop`.
#[derive(Debug)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    /// Copy `src` to `dst` (truncating any existing file there) and return
    /// a guard that deletes `dst` when dropped.
    ///
    /// The guard is armed before the byte copy runs, so an interrupted copy
    /// still deletes the partial file on the error return path.
    pub fn create(src: &Path, dst: &Path) -> Result<Snapshot, SnapshotError> {
        let mut reader = File::open(src).map_err(|e| SnapshotError::Read {
            path: src.to_path_buf(),
            source: e,
        })?;
        let mut writer = File::create(dst).map_err(|e| SnapshotError::Write {
            path: dst.to_path_buf(),
            source: e,
        })?;

        let snapshot = Snapshot {
            path: dst.to_path_buf(),
        };

        let bytes = io::copy(&mut reader, &mut writer).map_err(|e| SnapshotError::Copy {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source: e,
        })?;
        debug!(src = %src.display(), dst = %dst.display(), bytes, "snapshot created");

        Ok(snapshot)
    }

    /// Path of the scratch copy.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != io::ErrorKind::NotFound
        {
            warn!(path = %self.path.display(), error = %e, "failed to remove snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_bytes_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("places.sqlite");
        let dst = dir.path().join("copy.sqlite");
        fs::write(&src, b"SQLite format 3\x00rest of the file").unwrap();

        let snapshot = Snapshot::create(&src, &dst).unwrap();
        assert_eq!(snapshot.path(), dst);
        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn drop_removes_the_copy() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.db");
        let dst = dir.path().join("dst.db");
        fs::write(&src, b"data").unwrap();

        let snapshot = Snapshot::create(&src, &dst).unwrap();
        assert!(dst.exists());
        drop(snapshot);
        assert!(!dst.exists());
    }

    #[test]
    fn overwrites_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.db");
        let dst = dir.path().join("dst.db");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"stale snapshot from a previous run").unwrap();

        let _snapshot = Snapshot::create(&src, &dst).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"new");
    }

    #[test]
    fn missing_source_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("no-such-file.db");
        let dst = dir.path().join("dst.db");

        let err = Snapshot::create(&src, &dst).unwrap_err();
        assert!(matches!(err, SnapshotError::Read { .. }));
        // The destination is never created when the source cannot be opened.
        assert!(!dst.exists());
    }

    #[test]
    fn drop_tolerates_already_removed_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.db");
        let dst = dir.path().join("dst.db");
        fs::write(&src, b"data").unwrap();

        let snapshot = Snapshot::create(&src, &dst).unwrap();
        fs::remove_file(&dst).unwrap();
        // Must not panic.
        drop(snapshot);
    }
}
