//! Application error types and user-facing error formatting.
//!
//! Provides structured error types for each pipeline stage:
//! - [`ProfileError`] for profile resolution (profiles.ini parsing)
//! - [`SnapshotError`] for the scratch copy of places.sqlite
//! - [`DbError`] for database open / query / row iteration
//! - [`FoxhistError`] as the unified top-level error type
//!
//! The [`FoxhistError`] type carries contextual hints so that `main()` can
//! present human-readable diagnostics on stderr without ever exposing raw
//! panics or debug formatting. Every diagnostic names the stage that failed.

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

/// Process exit codes.
///
/// * `0` - completed iteration, even with zero matches
/// * `1` - any fatal error, including bad CLI usage
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

// ---------------------------------------------------------------------------
// Stage-specific error types
// ---------------------------------------------------------------------------

/// Errors arising while resolving the default Firefox profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// `profiles.ini` does not exist under the profiles root.
    #[error("profiles.ini not found at {}", .0.display())]
    IniMissing(PathBuf),

    /// `profiles.ini` exists but could not be opened or read.
    #[error("could not read {}: {}", .path.display(), .source)]
    IniRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No `[Install...]` block with a `Default=` key was found.
    #[error("no default profile found in {}", .0.display())]
    NotFound(PathBuf),
}

/// Errors arising while copying the live database to the scratch path.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The source database could not be opened for reading.
    #[error("could not open source file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The scratch destination could not be created or truncated.
    #[error("could not create destination file {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The streamed byte copy failed partway through.
    #[error("could not copy {} to {}: {}", .src.display(), .dst.display(), .source)]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        source: std::io::Error,
    },
}

/// Errors arising from the SQLite query layer.
///
/// A row whose `url` column fails to decode is *not* represented here: it is
/// recoverable, logged at `warn`, and iteration continues.
#[derive(Error, Debug)]
pub enum DbError {
    /// The snapshot could not be opened as a SQLite database.
    #[error("failed to open database {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// The history query failed to prepare or execute.
    #[error("query failed: {0}")]
    Query(rusqlite::Error),

    /// Row iteration ended with a terminal error after zero or more rows.
    #[error("error iterating rows: {0}")]
    RowIteration(rusqlite::Error),

    /// Writing a matched URL to the output sink failed.
    #[error("failed to write result: {0}")]
    Write(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Unified application error
// ---------------------------------------------------------------------------

/// Unified error type for the entire application.
///
/// Allows callers to propagate any stage's error through a single `Result`
/// type while still enabling pattern matching on the specific variant.
#[derive(Error, Debug)]
pub enum FoxhistError {
    /// A usage / argument error (missing or empty query).
    #[error("usage: foxhist \"<query>\"")]
    Usage,

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FoxhistError {
    /// Return an optional human-readable hint that may help the user fix
    /// the problem.  Returns `None` when no specific guidance applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FoxhistError::Profile(ProfileError::IniMissing(_)) => {
                Some("is Firefox installed? pass --profiles-dir to point at its profile root")
            }
            FoxhistError::Profile(ProfileError::NotFound(_)) => {
                Some("profiles.ini has no [Install...] block with a Default= key")
            }
            FoxhistError::Snapshot(SnapshotError::Read { .. }) => {
                Some("verify the profile contains a places.sqlite history database")
            }
            FoxhistError::Snapshot(SnapshotError::Write { .. }) => {
                Some("check permissions on the scratch path, or pass --snapshot")
            }
            FoxhistError::Db(DbError::Open { .. }) => {
                Some("the history database may be corrupt or not a SQLite file")
            }
            FoxhistError::Db(DbError::Query(_)) => {
                Some("check your glob pattern for unbalanced brackets")
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
