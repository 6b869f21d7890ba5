//! Configuration for Rotaphrase.
//!
//! The optional config file lives at `~/.rotaphrase/config.toml` (or wherever
//! `ROTAPHRASE_CONFIG` points):
//!
//! ```toml
//! [paths]
//! corpus = "~/phrases.txt"
//! tracking = "${XDG_STATE_HOME}/rotaphrase/unused.json"
//! ```
//!
//! Raw TOML structs stay private; [`RotaphraseConfig`] is the resolved form
//! with every path made concrete.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "ROTAPHRASE_CONFIG";

const APP_DIR: &str = ".rotaphrase";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_CORPUS_FILE: &str = "phrases.txt";
const DEFAULT_TRACKING_FILE: &str = "unused.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse TOML from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    paths: Option<RawPaths>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPaths {
    corpus: Option<String>,
    tracking: Option<String>,
}

/// Where the phrase list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusLocation {
    File(PathBuf),
    /// The list compiled into the binary.
    Bundled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotaphraseConfig {
    corpus: CorpusLocation,
    tracking_path: PathBuf,
}

impl RotaphraseConfig {
    /// Load from [`config_path`], falling back to defaults in [`app_dir`]
    /// when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path(), &app_dir())
    }

    /// Load the config file at `path`. Keys it leaves out, or a missing file,
    /// take their defaults from `default_dir`.
    pub fn load_from(path: &Path, default_dir: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(Self::defaults(default_dir));
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or(default_dir);
        Self::from_toml_str(&raw, base, default_dir).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve a config document. Relative paths are taken relative to
    /// `base_dir` (the config file's directory); omitted keys get their
    /// defaults from `default_dir`.
    pub fn from_toml_str(
        raw: &str,
        base_dir: &Path,
        default_dir: &Path,
    ) -> Result<Self, toml::de::Error> {
        let parsed: RawConfig = toml::from_str(raw)?;
        let paths = parsed.paths.unwrap_or_default();
        let defaults = Self::defaults(default_dir);

        let corpus = paths
            .corpus
            .map(|value| CorpusLocation::File(resolve_path(&value, base_dir)))
            .unwrap_or(defaults.corpus);
        let tracking_path = paths
            .tracking
            .map(|value| resolve_path(&value, base_dir))
            .unwrap_or(defaults.tracking_path);

        Ok(Self {
            corpus,
            tracking_path,
        })
    }

    /// `<dir>/phrases.txt` if present (else the bundled list) and
    /// `<dir>/unused.json`.
    #[must_use]
    pub fn defaults(dir: &Path) -> Self {
        let corpus_path = dir.join(DEFAULT_CORPUS_FILE);
        let corpus = if corpus_path.is_file() {
            CorpusLocation::File(corpus_path)
        } else {
            CorpusLocation::Bundled
        };
        Self {
            corpus,
            tracking_path: dir.join(DEFAULT_TRACKING_FILE),
        }
    }

    #[must_use]
    pub fn corpus(&self) -> &CorpusLocation {
        &self.corpus
    }

    #[must_use]
    pub fn tracking_path(&self) -> &Path {
        &self.tracking_path
    }
}

/// `~/.rotaphrase`, or `./.rotaphrase` when no home directory is known.
#[must_use]
pub fn app_dir() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(APP_DIR), |home| home.join(APP_DIR))
}

#[must_use]
pub fn config_path() -> PathBuf {
    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => app_dir().join(CONFIG_FILE),
    }
}

/// Replace `${VAR}` references with their environment values. Unset variables
/// expand to nothing; an unterminated `${` is kept literally.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

fn resolve_path(value: &str, base_dir: &Path) -> PathBuf {
    let expanded = expand_env_vars(value.trim());
    let path = match expanded.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(&expanded),
        },
        None => PathBuf::from(&expanded),
    };
    if path.is_relative() {
        base_dir.join(path)
    } else {
        path
    }
}
