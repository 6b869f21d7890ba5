//! The three steps of a rotation: derive the unused set, pick, rotate.

use rand::Rng;
use rotaphrase_types::{Corpus, NoPhrasesAvailableError, UnusedSet};
use tracing::{debug, info, warn};

use crate::tracker::TrackingError;

/// Why a fresh cycle was started instead of continuing the tracked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// Nothing has been tracked yet.
    Absent,
    /// Tracking state exists but could not be read or decoded.
    Invalid,
    /// The tracked set was empty: the previous cycle is complete.
    Exhausted,
    /// Every tracked phrase has since been removed from the corpus.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedOrigin {
    Tracked,
    Reset(ResetReason),
}

/// Turn a tracker's `load` result into the pool for this invocation.
///
/// Tracking problems never fail here: they are logged and the pool becomes a
/// full copy of the corpus.
pub fn load_unused_set(
    corpus: &Corpus,
    tracked: Result<Option<Vec<String>>, TrackingError>,
) -> (UnusedSet, UnusedOrigin) {
    let tracked = match tracked {
        Ok(Some(tracked)) => tracked,
        Ok(None) => return reset(corpus, ResetReason::Absent),
        Err(e) => {
            warn!("Ignoring tracking state: {e}");
            return reset(corpus, ResetReason::Invalid);
        }
    };

    if tracked.is_empty() {
        return reset(corpus, ResetReason::Exhausted);
    }

    let tracked_len = tracked.len();
    let unused = UnusedSet::restricted_to(tracked, corpus);
    if unused.is_empty() {
        return reset(corpus, ResetReason::Stale);
    }
    if unused.len() < tracked_len {
        debug!(
            dropped = tracked_len - unused.len(),
            "Dropped tracked phrases missing from corpus"
        );
    }
    (unused, UnusedOrigin::Tracked)
}

fn reset(corpus: &Corpus, reason: ResetReason) -> (UnusedSet, UnusedOrigin) {
    info!(?reason, phrases = corpus.len(), "Starting new rotation cycle");
    (UnusedSet::full(corpus), UnusedOrigin::Reset(reason))
}

/// Pick one entry uniformly at random and return it with the remaining pool.
pub fn pick_and_rotate<R: Rng + ?Sized>(
    mut unused: UnusedSet,
    rng: &mut R,
) -> Result<(String, UnusedSet), NoPhrasesAvailableError> {
    if unused.is_empty() {
        return Err(NoPhrasesAvailableError);
    }
    let index = rng.random_range(0..unused.len());
    let phrase = unused.take(index)?;
    debug!(index, remaining = unused.len(), "Selected phrase");
    Ok((phrase, unused))
}
