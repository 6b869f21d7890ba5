//! Atomic file write helpers.
//!
//! Writes go to a temp file in the destination directory, which is then renamed
//! over the target. Where rename-over-existing fails (Windows), the old file is
//! moved to `<name>.bak` first and restored if the second rename also fails.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSyncPolicy {
    SyncAll,
    SkipSync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentDirSyncPolicy {
    SyncBestEffort,
    SkipSync,
}

#[derive(Debug, Clone, Copy)]
pub struct AtomicWriteOptions {
    /// File sync policy for the temp file before persisting.
    pub file_sync: FileSyncPolicy,
    /// Parent directory sync policy after the file has been persisted.
    pub parent_dir_sync: ParentDirSyncPolicy,
    /// Create missing parent directories before writing.
    pub create_parent: bool,
}

impl Default for AtomicWriteOptions {
    fn default() -> Self {
        Self {
            file_sync: FileSyncPolicy::SyncAll,
            parent_dir_sync: ParentDirSyncPolicy::SkipSync,
            create_parent: true,
        }
    }
}

/// `<path>.bak`, the slot used while swapping a file on platforms without
/// atomic replace.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Recover from an interrupted overwrite by restoring `<path>.bak`.
///
/// If `path` is missing but its backup exists, a crash happened between moving
/// the old file aside and renaming the new one into place.
pub fn recover_bak_file(path: &Path) {
    let backup = backup_path(path);
    if path.exists() || !backup.exists() {
        return;
    }
    match fs::rename(&backup, path) {
        Ok(()) => warn!(
            path = %path.display(),
            "Recovered .bak file from interrupted atomic write"
        ),
        Err(e) => warn!(path = %path.display(), "Failed to recover .bak file: {e}"),
    }
}

pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    atomic_write_with_options(path, bytes, AtomicWriteOptions::default())
}

pub fn atomic_write_with_options(
    path: impl AsRef<Path>,
    bytes: &[u8],
    options: AtomicWriteOptions,
) -> io::Result<()> {
    let path = path.as_ref();
    let parent = parent_dir(path);

    if options.create_parent {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    if options.file_sync == FileSyncPolicy::SyncAll {
        tmp.as_file().sync_all()?;
    }

    if let Err(err) = tmp.persist(path) {
        if !path.exists() {
            return Err(err.error);
        }
        replace_via_backup(err.file, path)?;
    }

    if options.parent_dir_sync == ParentDirSyncPolicy::SyncBestEffort {
        best_effort_sync_dir(parent);
    }

    Ok(())
}

fn replace_via_backup(tmp: NamedTempFile, path: &Path) -> io::Result<()> {
    let backup = backup_path(path);
    let _ = fs::remove_file(&backup);
    fs::rename(path, &backup)?;

    if let Err(err) = tmp.persist(path) {
        let _ = fs::rename(&backup, path);
        return Err(err.error);
    }
    if let Err(e) = fs::remove_file(&backup) {
        warn!(path = %backup.display(), "Failed to remove .bak after atomic write: {e}");
    }
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn best_effort_sync_dir(dir: &Path) {
    // Directory handles can't be opened this way on Windows.
    if cfg!(windows) {
        return;
    }
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        debug!(path = %dir.display(), "Parent directory sync_all failed (best-effort): {e}");
    }
}
