//! Default-profile resolution from `profiles.ini`.
//!
//! Firefox records the active profile in an `[Install<hash>]` block of
//! `profiles.ini`, keyed by `Default=<relative path>`. This module scans the
//! file line by line, enters the first block whose header matches
//! `[Install...]`, and returns the value of the first `Default=` line seen
//! while inside it. A blank line inside the block ends the scan: the key
//! belongs to exactly one block, so there is nothing further to look for.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::ProfileError;

/// File name of the profile registry inside the profiles root.
pub const PROFILES_INI: &str = "profiles.ini";

/// File name of the history database inside a profile directory.
pub const PLACES_DB: &str = "places.sqlite";

/// Matches the `[Install<hash>]` block header.
static INSTALL_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Install.*\]").expect("hardcoded header pattern is valid"));

/// Resolve the default profile directory under `profiles_root`.
///
/// Reads `<profiles_root>/profiles.ini` and joins the profile name from its
/// `[Install...]` block onto the root. The returned directory is not checked
/// for existence; the snapshot copy will surface a missing database.
pub fn default_profile_dir(profiles_root: &Path) -> Result<PathBuf, ProfileError> {
    let ini_path = profiles_root.join(PROFILES_INI);
    let file = File::open(&ini_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProfileError::IniMissing(ini_path.clone())
        } else {
            ProfileError::IniRead {
                path: ini_path.clone(),
                source: e,
            }
        }
    })?;

    let name = scan_default_profile(BufReader::new(file), &ini_path)?;
    debug!(profile = %name, "resolved default profile");
    Ok(profiles_root.join(name))
}

/// Scan ini lines for the first `[Install...]` block's `Default=` value.
///
/// The value is returned exactly as written after the `=` (no trimming).
/// Only the first matching block is honored; a blank line inside it aborts
/// the whole scan, yielding [`ProfileError::NotFound`].
fn scan_default_profile<R: BufRead>(reader: R, ini_path: &Path) -> Result<String, ProfileError> {
    let mut in_install_block = false;

    for line in reader.lines() {
        let line = line.map_err(|e| ProfileError::IniRead {
            path: ini_path.to_path_buf(),
            source: e,
        })?;

        if INSTALL_HEADER.is_match(&line) {
            in_install_block = true;
        }

        if in_install_block && let Some(name) = line.strip_prefix("Default=") {
            return Ok(name.to_string());
        }

        if in_install_block && line.is_empty() {
            break;
        }
    }

    Err(ProfileError::NotFound(ini_path.to_path_buf()))
}
