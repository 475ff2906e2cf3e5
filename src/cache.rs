//! Learned-server cache.
//!
//! Maps a zone (`com`, `co.uk`, ...) to the WHOIS server that last produced a
//! confirmed answer for it. Entries are written only after the classifier has
//! accepted a response, so the cache never holds negative or unverified
//! results. Entries are never evicted; the map is bounded by the number of
//! distinct zones a process looks up.

use std::collections::HashMap;
use std::sync::Mutex;

/// A synchronized zone → server map.
///
/// A [`crate::WhoisClient`] holds two of these: the learned-server cache and
/// the root-zone discovery cache. Lookups from concurrent tasks may read and
/// write them at the same time; a lost race only costs a redundant future
/// network query, never a wrong answer.
#[derive(Debug, Default)]
pub struct ZoneCache {
    entries: Mutex<HashMap<String, String>>,
}

impl ZoneCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached server for `zone`, if any.
    pub fn get(&self, zone: &str) -> Option<String> {
        self.entries.lock().ok()?.get(zone).cloned()
    }

    /// Records `server` as the known-good server for `zone`.
    pub fn insert(&self, zone: &str, server: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(zone.to_string(), server.to_string());
        }
    }
}
