//! Regex compilation cache for `match()` and `search()`
//!
//! Patterns are usually literals repeated for every candidate node, so the
//! compiled form is kept per translated pattern. The `regex` engine runs in
//! linear time, so patterns need no execution timeout.

use std::sync::{PoisonError, RwLock};

use hashbrown::HashMap;
use regex::Regex;

/// Default number of compiled patterns kept by a cache
pub const DEFAULT_CAPACITY: usize = 32;

/// Bounded cache of compiled regexes
///
/// Once full, newly compiled patterns are returned without being stored.
pub struct RegexCache {
    cache: RwLock<HashMap<String, Regex>>,
    capacity: usize,
}

impl RegexCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::with_capacity(capacity)),
            capacity,
        }
    }

    /// Get compiled regex from cache or compile and cache if not present
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        // Read lock fast path
        if let Some(regex) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
        {
            return Ok(regex.clone());
        }

        let regex = Regex::new(pattern)?;
        log::debug!("compiled regex {pattern:?}");

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if cache.len() < self.capacity {
            cache.insert(pattern.to_string(), regex.clone());
        } else {
            log::trace!("regex cache full, not caching {pattern:?}");
        }

        Ok(regex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref REGEX_CACHE: RegexCache = RegexCache::new();
}
