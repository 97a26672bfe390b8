//! The word-existence boundary.
//!
//! The turn engine asks a [`WordValidator`] about every distinct word a move
//! forms and waits for all answers before committing. Implementations may go
//! over the network; a failed lookup is an `Err`, never a silent `false`, so
//! callers can fall back to another source before giving up.

use async_trait::async_trait;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::core::Locale;

/// Why a lookup produced no definitive answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A single source failed (network, rate limit, bad response).
    #[error("lookup source `{origin}` unavailable: {detail}")]
    Unavailable { origin: String, detail: String },

    /// Every source of a chain failed for this word.
    #[error("all lookup sources failed for `{0}`")]
    Exhausted(String),
}

impl LookupError {
    pub fn unavailable(origin: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Unavailable {
            origin: origin.into(),
            detail: detail.into(),
        }
    }
}

/// Asynchronous word-existence check.
#[async_trait]
pub trait WordValidator: Send + Sync {
    /// Whether `word` is a playable word in `locale`.
    ///
    /// `Ok(false)` is a definitive "no"; `Err` means no answer was obtained.
    async fn exists(&self, locale: &Locale, word: &str) -> Result<bool, LookupError>;
}

#[async_trait]
impl<T: WordValidator + ?Sized> WordValidator for Arc<T> {
    async fn exists(&self, locale: &Locale, word: &str) -> Result<bool, LookupError> {
        (**self).exists(locale, word).await
    }
}

/// In-memory word list for a single locale.
///
/// Matching is case-insensitive. Words of other locales do not exist.
#[derive(Clone, Debug)]
pub struct WordList {
    locale: Locale,
    words: FxHashSet<String>,
}

impl WordList {
    /// Build a list from words.
    pub fn from_words<I, S>(locale: Locale, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { locale, words }
    }

    /// Parse a newline-separated list. Blank lines and `#` comments are skipped.
    pub fn parse(locale: Locale, text: &str) -> Self {
        Self::from_words(
            locale,
            text.lines().filter(|line| !line.trim_start().starts_with('#')),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }
}

#[async_trait]
impl WordValidator for WordList {
    async fn exists(&self, locale: &Locale, word: &str) -> Result<bool, LookupError> {
        Ok(*locale == self.locale && self.contains(word))
    }
}
