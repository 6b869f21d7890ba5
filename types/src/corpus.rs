//! The fixed list of candidate phrases.

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("phrase corpus contains no usable lines")]
pub struct EmptyCorpusError;

/// An ordered, non-empty list of trimmed, non-blank phrases.
///
/// Invariant: at least one phrase, and no phrase is empty after trimming.
/// Duplicate lines are kept; each occurrence is a separate candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    phrases: Vec<String>,
}

impl Corpus {
    /// Split `text` on line boundaries, trim each line and drop blank ones.
    ///
    /// Both `\n` and `\r\n` endings are accepted.
    pub fn parse(text: &str) -> Result<Self, EmptyCorpusError> {
        Self::from_phrases(text.lines())
    }

    /// Build a corpus from already-split phrases, applying the same trimming
    /// rules as [`Corpus::parse`].
    pub fn from_phrases<I, S>(phrases: I) -> Result<Self, EmptyCorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .filter_map(|phrase| {
                let trimmed = phrase.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();

        if phrases.is_empty() {
            return Err(EmptyCorpusError);
        }
        Ok(Self { phrases })
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always `false` for a constructed corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[must_use]
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.iter().any(|p| p == phrase)
    }

    /// Borrowed membership index for filtering many candidates at once.
    #[must_use]
    pub fn membership(&self) -> HashSet<&str> {
        self.phrases.iter().map(String::as_str).collect()
    }
}
