//! Storage for the unused set between invocations.
//!
//! [`PhraseTracker`] is the seam: the rotator only sees `load`/`save`.
//! [`FileTracker`] keeps a JSON array on disk; [`MemoryTracker`] keeps the same
//! text in memory so every load path (absent, malformed, stale) can be
//! exercised without touching the filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rotaphrase_types::UnusedSet;
use rotaphrase_utils::{AtomicWriteOptions, atomic_write_with_options, recover_bak_file};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("failed to read tracking state from {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: io::Error,
    },
    #[error("tracking state at {location} is not an array of strings: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode tracking state: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write tracking state to {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: io::Error,
    },
}

pub trait PhraseTracker {
    /// The persisted unused set, or `Ok(None)` if nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<String>>, TrackingError>;

    /// Replace the persisted unused set.
    fn save(&mut self, unused: &UnusedSet) -> Result<(), TrackingError>;
}

fn decode(raw: &str, location: &str) -> Result<Vec<String>, TrackingError> {
    serde_json::from_str(raw).map_err(|source| TrackingError::Malformed {
        location: location.to_string(),
        source,
    })
}

fn encode(unused: &UnusedSet) -> Result<Vec<u8>, TrackingError> {
    let mut bytes = serde_json::to_vec_pretty(unused).map_err(TrackingError::Encode)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Tracking state kept in a JSON file, rewritten atomically on every save.
#[derive(Debug, Clone)]
pub struct FileTracker {
    path: PathBuf,
    write_options: AtomicWriteOptions,
}

impl FileTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_options: AtomicWriteOptions::default(),
        }
    }

    pub fn with_write_options(mut self, options: AtomicWriteOptions) -> Self {
        self.write_options = options;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl PhraseTracker for FileTracker {
    fn load(&self) -> Result<Option<Vec<String>>, TrackingError> {
        recover_bak_file(&self.path);

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(TrackingError::Read {
                    location: self.location(),
                    source,
                });
            }
        };
        decode(&raw, &self.location()).map(Some)
    }

    fn save(&mut self, unused: &UnusedSet) -> Result<(), TrackingError> {
        let bytes = encode(unused)?;
        atomic_write_with_options(&self.path, &bytes, self.write_options).map_err(|source| {
            TrackingError::Write {
                location: self.location(),
                source,
            }
        })
    }
}

/// In-process tracking state holding the same JSON text a file would.
#[derive(Debug, Clone, Default)]
pub struct MemoryTracker {
    contents: Option<String>,
    fail_writes: bool,
    saves: usize,
}

impl MemoryTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text, which need not be valid JSON.
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            contents: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Make every `save` fail, as an unwritable disk would.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PhraseTracker for MemoryTracker {
    fn load(&self) -> Result<Option<Vec<String>>, TrackingError> {
        self.contents
            .as_deref()
            .map(|raw| decode(raw, "memory"))
            .transpose()
    }

    fn save(&mut self, unused: &UnusedSet) -> Result<(), TrackingError> {
        if self.fail_writes {
            return Err(TrackingError::Write {
                location: "memory".to_string(),
                source: io::Error::other("writes disabled"),
            });
        }
        let bytes = encode(unused)?;
        self.contents = Some(String::from_utf8_lossy(&bytes).into_owned());
        self.saves += 1;
        Ok(())
    }
}
