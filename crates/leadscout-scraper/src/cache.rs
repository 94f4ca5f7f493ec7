//! Single-slot cache for the most recent completed result sequence.
//!
//! The tool only ever redisplays the latest run, so one slot keyed by the
//! full request triple is all the caching the system carries. The caller
//! invalidates before each new extraction run to force fresh data.

use std::time::{Duration, Instant};

use leadscout_core::Lead;

/// Exact-match cache key: the full request triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub keyword: String,
    pub location: String,
    pub max_results: usize,
}

pub struct ResultCache {
    ttl: Duration,
    entry: Option<(CacheKey, Instant, Vec<Lead>)>,
}

impl ResultCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Returns the cached sequence for an exact, still-fresh key match.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Vec<Lead>> {
        let (held_key, stored_at, leads) = self.entry.as_ref()?;
        if held_key != key || stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(leads.clone())
    }

    /// Replaces the cached run wholesale.
    pub fn store(&mut self, key: CacheKey, leads: Vec<Lead>) {
        self.entry = Some((key, Instant::now(), leads));
    }

    /// Drops the cached run unconditionally.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
