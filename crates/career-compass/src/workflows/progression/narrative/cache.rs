use super::{NarrativeError, NarrativeGenerator};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

type CacheKey = (String, String);

/// Memoises successful narratives for the life of the process, keyed by the exact
/// profile text and industry label. Failures are not cached.
pub struct CachedNarrator<N> {
    inner: Arc<N>,
    entries: Mutex<HashMap<CacheKey, String>>,
}

impl<N> CachedNarrator<N>
where
    N: NarrativeGenerator,
{
    pub fn new(inner: Arc<N>) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("narrative cache poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<N> NarrativeGenerator for CachedNarrator<N>
where
    N: NarrativeGenerator,
{
    async fn generate(&self, profile_text: &str, industry: &str) -> Result<String, NarrativeError> {
        let key = (profile_text.to_string(), industry.to_string());

        let cached = self
            .entries
            .lock()
            .expect("narrative cache poisoned")
            .get(&key)
            .cloned();
        if let Some(text) = cached {
            debug!(industry, "narrative cache hit");
            return Ok(text);
        }

        let text = self.inner.generate(profile_text, industry).await?;
        self.entries
            .lock()
            .expect("narrative cache poisoned")
            .insert(key, text.clone());
        Ok(text)
    }
}
