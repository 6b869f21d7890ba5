//! Shared test utilities and fixtures
//!
//! Each [`Workspace`] is a temp directory holding a corpus file and a
//! tracking file, so separate rotator instances behave like separate runs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rotaphrase_core::{FileCorpus, FileTracker, PhraseRotator};
use rotaphrase_utils::{AtomicWriteOptions, FileSyncPolicy, ParentDirSyncPolicy};
use tempfile::TempDir;

pub type FileRotator = PhraseRotator<FileCorpus, FileTracker, StdRng>;

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn with_corpus(text: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("phrases.txt"), text).expect("write corpus");
        Self { dir }
    }

    pub fn corpus_path(&self) -> PathBuf {
        self.dir.path().join("phrases.txt")
    }

    pub fn tracking_path(&self) -> PathBuf {
        self.dir.path().join("state").join("unused.json")
    }

    pub fn write_tracking(&self, raw: &str) {
        let path = self.tracking_path();
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, raw).expect("write tracking");
    }

    /// Parsed tracking file, or `None` if it has not been written.
    pub fn tracked(&self) -> Option<Vec<String>> {
        let raw = fs::read_to_string(self.tracking_path()).ok()?;
        Some(serde_json::from_str(&raw).expect("tracking file is a string array"))
    }

    /// A fresh rotator over this workspace, as a new process would build.
    pub fn rotator(&self, seed: u64) -> FileRotator {
        let tracker = FileTracker::new(self.tracking_path()).with_write_options(AtomicWriteOptions {
            file_sync: FileSyncPolicy::SkipSync,
            parent_dir_sync: ParentDirSyncPolicy::SkipSync,
            create_parent: true,
        });
        PhraseRotator::new(
            FileCorpus::new(self.corpus_path()),
            tracker,
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
