//! The phrase rotator: one call, one phrase, no repeats within a cycle.
//!
//! ```text
//! read corpus -> load tracked set -> pick + rotate -> save (best-effort) -> phrase
//! ```
//!
//! Failures reading the corpus or selecting a phrase surface as the opaque
//! [`PhraseUnavailableError`]; their detail goes to the log. Tracking problems
//! never fail a selection: a bad read resets the cycle, and a failed write is
//! reported through [`Persistence::Failed`].

use rand::Rng;
use rotaphrase_types::{Corpus, EmptyCorpusError, NoPhrasesAvailableError, UnusedSet};
use thiserror::Error;
use tracing::{error, warn};

use crate::corpus_source::{CorpusSource, CorpusSourceError};
use crate::rotation::{UnusedOrigin, load_unused_set, pick_and_rotate};
use crate::tracker::{PhraseTracker, TrackingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("phrase unavailable")]
pub struct PhraseUnavailableError;

/// Internal failure of a rotator operation, with full detail.
#[derive(Debug, Error)]
pub enum RotationError {
    #[error(transparent)]
    Source(#[from] CorpusSourceError),
    #[error(transparent)]
    EmptyCorpus(#[from] EmptyCorpusError),
    #[error(transparent)]
    NoPhrases(#[from] NoPhrasesAvailableError),
    #[error(transparent)]
    Tracking(#[from] TrackingError),
}

/// Outcome of saving the rotated set after a phrase was chosen.
#[derive(Debug)]
pub enum Persistence {
    Saved,
    /// The phrase is still valid; the next call may repeat a phrase.
    Failed(TrackingError),
}

impl Persistence {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Persistence::Saved)
    }
}

#[derive(Debug)]
pub struct Selection {
    pub phrase: String,
    /// Phrases left in this cycle after the selection.
    pub remaining: usize,
    pub origin: UnusedOrigin,
    pub persistence: Persistence,
}

/// Read-only view of the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStatus {
    pub remaining: usize,
    pub total: usize,
    pub origin: UnusedOrigin,
}

pub struct PhraseRotator<S, T, R> {
    source: S,
    tracker: T,
    rng: R,
}

impl<S, T, R> PhraseRotator<S, T, R>
where
    S: CorpusSource,
    T: PhraseTracker,
    R: Rng,
{
    pub fn new(source: S, tracker: T, rng: R) -> Self {
        Self {
            source,
            tracker,
            rng,
        }
    }

    /// Return the next phrase, discarding persistence detail.
    pub fn get_post_text(&mut self) -> Result<String, PhraseUnavailableError> {
        self.next_phrase().map(|selection| selection.phrase)
    }

    /// Select the next phrase and report whether the rotation was saved.
    pub fn next_phrase(&mut self) -> Result<Selection, PhraseUnavailableError> {
        self.rotate().map_err(|e| {
            error!("Could not select a phrase: {e}");
            PhraseUnavailableError
        })
    }

    fn rotate(&mut self) -> Result<Selection, RotationError> {
        let corpus = self.load_corpus()?;
        let (unused, origin) = load_unused_set(&corpus, self.tracker.load());
        let (phrase, unused) = pick_and_rotate(unused, &mut self.rng)?;

        let persistence = match self.tracker.save(&unused) {
            Ok(()) => Persistence::Saved,
            Err(e) => {
                warn!("Failed to save tracking state; rotation progress lost: {e}");
                Persistence::Failed(e)
            }
        };

        Ok(Selection {
            phrase,
            remaining: unused.len(),
            origin,
            persistence,
        })
    }

    /// Inspect the cycle without advancing it.
    pub fn status(&self) -> Result<CycleStatus, RotationError> {
        let corpus = self.load_corpus()?;
        let (unused, origin) = load_unused_set(&corpus, self.tracker.load());
        Ok(CycleStatus {
            remaining: unused.len(),
            total: corpus.len(),
            origin,
        })
    }

    /// Start a new cycle now. Returns the size of the fresh unused set.
    pub fn reset(&mut self) -> Result<usize, RotationError> {
        let corpus = self.load_corpus()?;
        let unused = UnusedSet::full(&corpus);
        self.tracker.save(&unused)?;
        Ok(unused.len())
    }

    fn load_corpus(&self) -> Result<Corpus, RotationError> {
        let text = self.source.read()?;
        Ok(Corpus::parse(&text)?)
    }

    #[must_use]
    pub fn tracker(&self) -> &T {
        &self.tracker
    }
}
