//! Ordered fallback across lookup sources.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use super::validator::{LookupError, WordValidator};
use crate::core::Locale;

/// Asks each source in turn until one gives a definitive answer.
///
/// A source's `Ok(false)` is final; only an `Err` falls through to the next
/// source. When every source fails the chain reports
/// [`LookupError::Exhausted`].
#[derive(Clone, Default)]
pub struct FallbackChain {
    sources: Vec<(String, Arc<dyn WordValidator>)>,
}

impl FallbackChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named source.
    #[must_use]
    pub fn then(mut self, name: impl Into<String>, source: Arc<dyn WordValidator>) -> Self {
        self.sources.push((name.into(), source));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.sources.iter().map(|(name, _)| name)).finish()
    }
}

#[async_trait]
impl WordValidator for FallbackChain {
    async fn exists(&self, locale: &Locale, word: &str) -> Result<bool, LookupError> {
        for (name, source) in &self.sources {
            match source.exists(locale, word).await {
                Ok(found) => return Ok(found),
                Err(err) => warn!(source = %name, word, error = %err, "lookup source failed, falling back"),
            }
        }
        Err(LookupError::Exhausted(word.to_string()))
    }
}
