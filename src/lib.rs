//! foxhist - fuzzy glob search over Firefox browsing history.
//!
//! The whole tool is one linear pipeline:
//!
//! 1. [`profile`] resolves the default profile directory from `profiles.ini`
//! 2. [`snapshot`] copies `places.sqlite` to a scratch path (Firefox locks
//!    the live file), guarded so the copy is deleted on every exit path
//! 3. [`pattern`] normalizes the query into a glob
//! 4. [`db`] runs the history query against the copy
//! 5. [`output`] prints each distinct URL once, oldest visit first
//!
//! [`run`] wires the stages together; the binary in `main.rs` only parses
//! arguments, calls [`run`], and maps errors to exit codes.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod profile;
pub mod snapshot;

use std::io::Write;

use tracing::debug;

use crate::errors::FoxhistError;

/// Execute the search pipeline, writing matched URLs to `out`.
///
/// Returns the number of distinct URLs printed. Zero matches is success.
/// The scratch snapshot is removed before this function returns, whether it
/// succeeds or fails.
pub fn run<W: Write>(args: &cli::Cli, out: &mut W) -> Result<usize, FoxhistError> {
    if args.query.is_empty() {
        return Err(FoxhistError::Usage);
    }

    let mut config = config::Config::load()?;
    if let Some(dir) = &args.profiles_dir {
        config.profiles_dir = Some(dir.clone());
    }
    if let Some(path) = &args.snapshot {
        config.snapshot_path = path.clone();
    }

    let profiles_dir = config.resolve_profiles_dir()?;
    let profile_dir = profile::default_profile_dir(&profiles_dir)?;
    let db_path = profile_dir.join(profile::PLACES_DB);

    let snapshot = snapshot::Snapshot::create(&db_path, &config.snapshot_path)?;

    let pattern = pattern::normalize(&args.query);
    debug!(pattern = %pattern, "normalized query");

    // Declared after `snapshot` so the connection closes before the guard
    // removes the file.
    let conn = db::open_snapshot(snapshot.path())?;
    let mut printer = output::UrlPrinter::new(out);
    db::for_each_url(&conn, &pattern, |url| printer.emit(url).map(|_| ()))?;

    Ok(printer.printed())
}
