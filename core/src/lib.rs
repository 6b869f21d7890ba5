//! Phrase rotation for Rotaphrase.
//!
//! Returns phrases from a fixed corpus in random order without repeating any
//! phrase until every phrase has been returned once. The set of phrases not
//! yet returned is kept in a [`PhraseTracker`] between invocations.

mod corpus_source;
mod rotation;
mod rotator;
mod tracker;

use rand::rngs::ThreadRng;
use rotaphrase_config::{CorpusLocation, RotaphraseConfig};
use tracing::error;

pub use corpus_source::{
    BUNDLED_PHRASES, CorpusSource, CorpusSourceError, FileCorpus, InlineCorpus,
};
pub use rotation::{ResetReason, UnusedOrigin, load_unused_set, pick_and_rotate};
pub use rotator::{
    CycleStatus, Persistence, PhraseRotator, PhraseUnavailableError, RotationError, Selection,
};
pub use tracker::{FileTracker, MemoryTracker, PhraseTracker, TrackingError};

/// Rotator wired to the configured corpus and tracking file.
pub type ConfiguredRotator = PhraseRotator<CorpusLocation, FileTracker, ThreadRng>;

#[must_use]
pub fn rotator_from_config(config: &RotaphraseConfig) -> ConfiguredRotator {
    PhraseRotator::new(
        config.corpus().clone(),
        FileTracker::new(config.tracking_path()),
        rand::rng(),
    )
}

/// Next phrase using the user's configuration.
pub fn get_post_text() -> Result<String, PhraseUnavailableError> {
    let config = RotaphraseConfig::load().map_err(|e| {
        error!("Could not load configuration: {e}");
        PhraseUnavailableError
    })?;
    rotator_from_config(&config).get_post_text()
}
