//! Where corpus text comes from.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rotaphrase_config::CorpusLocation;
use thiserror::Error;

/// Phrase list compiled into the binary, used when no corpus file is configured.
pub const BUNDLED_PHRASES: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/phrases.txt"));

#[derive(Debug, Error)]
#[error("failed to read phrase corpus {path}: {source}")]
pub struct CorpusSourceError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl CorpusSourceError {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Produces the raw corpus text, read once per invocation.
pub trait CorpusSource {
    fn read(&self) -> Result<String, CorpusSourceError>;
}

/// A corpus file with one phrase per line.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for FileCorpus {
    fn read(&self) -> Result<String, CorpusSourceError> {
        read_file(&self.path)
    }
}

/// Corpus text held in memory.
#[derive(Debug, Clone)]
pub struct InlineCorpus(String);

impl InlineCorpus {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn bundled() -> Self {
        Self::new(BUNDLED_PHRASES)
    }
}

impl CorpusSource for InlineCorpus {
    fn read(&self) -> Result<String, CorpusSourceError> {
        Ok(self.0.clone())
    }
}

impl CorpusSource for CorpusLocation {
    fn read(&self) -> Result<String, CorpusSourceError> {
        match self {
            CorpusLocation::File(path) => read_file(path),
            CorpusLocation::Bundled => Ok(BUNDLED_PHRASES.to_string()),
        }
    }
}

fn read_file(path: &Path) -> Result<String, CorpusSourceError> {
    fs::read_to_string(path).map_err(|source| CorpusSourceError {
        path: path.to_path_buf(),
        source,
    })
}
