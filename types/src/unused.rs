//! Phrases not yet returned in the current rotation cycle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Corpus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no phrases available for selection")]
pub struct NoPhrasesAvailableError;

/// The ordered pool a rotation picks from.
///
/// Serializes as a plain JSON array of strings. Unlike [`Corpus`] it may be
/// empty: an empty set marks the end of a rotation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnusedSet(Vec<String>);

impl UnusedSet {
    /// A fresh cycle: every corpus phrase, in corpus order.
    #[must_use]
    pub fn full(corpus: &Corpus) -> Self {
        Self(corpus.phrases().to_vec())
    }

    /// Keep only the entries of `tracked` that appear in `corpus`.
    ///
    /// The relative order of `tracked` is preserved.
    #[must_use]
    pub fn restricted_to(tracked: Vec<String>, corpus: &Corpus) -> Self {
        let members = corpus.membership();
        Self(
            tracked
                .into_iter()
                .filter(|phrase| members.contains(phrase.as_str()))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Remove the entry at `index`, shifting later entries down.
    pub fn take(&mut self, index: usize) -> Result<String, NoPhrasesAvailableError> {
        if index >= self.0.len() {
            return Err(NoPhrasesAvailableError);
        }
        Ok(self.0.remove(index))
    }
}

impl From<Vec<String>> for UnusedSet {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}
