//! Shared infrastructure utilities for Rotaphrase.
//!
//! Cross-cutting IO helpers that don't belong in the domain-pure
//! `rotaphrase-types` crate:
//!
//! - **`atomic_write`**: Crash-safe file persistence (temp + rename)

pub mod atomic_write;

pub use atomic_write::{
    AtomicWriteOptions, FileSyncPolicy, ParentDirSyncPolicy, atomic_write,
    atomic_write_with_options, backup_path, recover_bak_file,
};
