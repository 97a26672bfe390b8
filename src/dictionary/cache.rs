//! Answer cache in front of a lookup source.

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use super::validator::{LookupError, WordValidator};
use crate::core::Locale;

/// Caches definitive answers per `(locale, word)`.
///
/// Both "exists" and "does not exist" are cached. Errors are not, so a
/// transient failure is retried on the next lookup.
pub struct CachedValidator<V> {
    inner: V,
    cache: Cache<(Locale, String), bool>,
}

impl<V> CachedValidator<V> {
    /// Wrap `inner` with a cache holding at most `capacity` answers.
    pub fn new(inner: V, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Drop every cached answer.
    pub fn clear(&self) {
        self.cache.invalidate_all();
        debug!("word cache cleared");
    }
}

#[async_trait]
impl<V: WordValidator> WordValidator for CachedValidator<V> {
    async fn exists(&self, locale: &Locale, word: &str) -> Result<bool, LookupError> {
        let key = (locale.clone(), word.trim().to_uppercase());
        if let Some(found) = self.cache.get(&key).await {
            debug!(%locale, word, found, "word cache hit");
            return Ok(found);
        }

        let found = self.inner.exists(locale, word).await?;
        self.cache.insert(key, found).await;
        Ok(found)
    }
}
