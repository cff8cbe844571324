//! Configuration file parsing, defaults, and merging.
//!
//! Configuration is loaded in layers (last wins):
//! 1. Built-in defaults
//! 2. Global config from `~/.foxhist/config.toml`
//! 3. CLI flags (`--profiles-dir`, `--snapshot`), applied by the caller
//!
//! The file layer only overrides fields it explicitly sets; absent fields
//! are left at their previous value.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Public config type (fully resolved)
// ---------------------------------------------------------------------------

/// Top-level configuration with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Firefox profiles root. `None` means "derive `~/.mozilla/firefox`
    /// from the home directory at use time".
    pub profiles_dir: Option<PathBuf>,
    /// Scratch path for the temporary history copy.
    pub snapshot_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles_dir: None,
            snapshot_path: std::env::temp_dir().join("places.sqlite"),
        }
    }
}

impl Config {
    /// The effective profiles root: the configured directory if set,
    /// otherwise `<home>/.mozilla/firefox`.
    pub fn resolve_profiles_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.profiles_dir {
            return Ok(dir.clone());
        }
        let Some(home) = home_dir() else {
            bail!("could not determine home directory; pass --profiles-dir");
        };
        Ok(home.join(".mozilla").join("firefox"))
    }
}

// ---------------------------------------------------------------------------
// Option-based overlay type (for partial deserialization)
// ---------------------------------------------------------------------------

/// Mirror of [`Config`] where every field is `Option`, so we can
/// deserialize a partial TOML file and overlay only the keys that are
/// present.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigOverlay {
    profiles_dir: Option<PathBuf>,
    snapshot_path: Option<PathBuf>,
}

impl Config {
    /// Apply an overlay on top of this config, replacing only the fields
    /// that are `Some` in the overlay.
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.profiles_dir {
            self.profiles_dir = Some(v);
        }
        if let Some(v) = overlay.snapshot_path {
            self.snapshot_path = v;
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Return the user's home directory.
fn home_dir() -> Option<PathBuf> {
    #[allow(deprecated)]
    std::env::home_dir()
}

/// Try to read a config file and parse it as an overlay.
/// Returns `Ok(None)` if the file does not exist.
fn load_overlay(path: &Path) -> Result<Option<ConfigOverlay>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let overlay = toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file: {}", path.display()))?;
            Ok(Some(overlay))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(anyhow::anyhow!(
            "failed to read config file {}: {}",
            path.display(),
            e
        )),
    }
}

impl Config {
    /// Load configuration: defaults, then `~/.foxhist/config.toml` if it
    /// exists. CLI flag overrides are applied by the caller afterwards.
    pub fn load() -> Result<Config> {
        let config_path = home_dir().map(|h| h.join(".foxhist").join("config.toml"));
        Self::load_with_path(config_path.as_deref())
    }

    /// Internal: load config from an explicit file path.
    ///
    /// This allows tests to supply a temporary file instead of the real
    /// `~/.foxhist/config.toml` without mutating environment variables.
    fn load_with_path(config_path: Option<&Path>) -> Result<Config> {
        let mut config = Config::default();
        if let Some(path) = config_path
            && let Some(overlay) = load_overlay(path)?
        {
            config.apply_overlay(overlay);
        }
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
