use super::storage::{KeyValueStore, MemoryStore};

/// Maximum number of recent checks kept
pub const MAX_RECENT: usize = 6;

/// Storage key holding the JSON-encoded recent list
pub const RECENT_KEY: &str = "recentFlowers";

/// Most-recent-first list of checked flowers, at most `MAX_RECENT` long,
/// without duplicates (case-sensitive).
///
/// Only successful checks should be recorded; the cache itself does not
/// know about failures.
pub struct RecentChecksCache {
    store: Box<dyn KeyValueStore>,
    entries: Vec<String>,
    cycling_index: Option<usize>,
}

impl RecentChecksCache {
    /// Read the persisted list. Missing or unparseable data yields an empty list.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let entries = store
            .get(RECENT_KEY)
            .map(|raw| parse_recent(&raw))
            .unwrap_or_default();

        Self {
            store,
            entries,
            cycling_index: None,
        }
    }

    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::new()))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Move `name` to the front, persist, and return the new list.
    ///
    /// A failed write is logged and the in-memory list is still updated.
    pub fn record(&mut self, name: &str) -> &[String] {
        if name.trim().is_empty() {
            return &self.entries;
        }

        self.entries = next_recent(&self.entries, name);
        self.cycling_index = None;

        match serde_json::to_string(&self.entries) {
            Ok(json) => {
                if let Err(e) = self.store.set(RECENT_KEY, &json) {
                    log::warn!("Failed to persist recent checks: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to encode recent checks: {}", e),
        }

        &self.entries
    }

    /// Cycle to the previous (older) entry.
    /// Stays on the oldest entry once reached.
    pub fn cycle_previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let next_idx = match self.cycling_index {
            None => 0,
            Some(idx) if idx + 1 < self.entries.len() => idx + 1,
            Some(idx) => idx,
        };

        self.cycling_index = Some(next_idx);
        self.entries.get(next_idx).cloned()
    }

    /// Cycle to the next (newer) entry.
    /// Returns None once past the most recent entry.
    pub fn cycle_next(&mut self) -> Option<String> {
        match self.cycling_index {
            None => None,
            Some(0) => {
                self.cycling_index = None;
                None
            }
            Some(idx) => {
                let next_idx = idx - 1;
                self.cycling_index = Some(next_idx);
                self.entries.get(next_idx).cloned()
            }
        }
    }

    pub fn reset_cycling(&mut self) {
        self.cycling_index = None;
    }
}

/// `[name]` followed by `previous` without `name`, truncated to `MAX_RECENT`
pub fn next_recent(previous: &[String], name: &str) -> Vec<String> {
    std::iter::once(name.to_string())
        .chain(previous.iter().filter(|e| e.as_str() != name).cloned())
        .take(MAX_RECENT)
        .collect()
}

fn parse_recent(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => trim_to_max(&deduplicate(&list)),
        Err(e) => {
            log::debug!("Discarding unreadable recent checks: {}", e);
            Vec::new()
        }
    }
}

/// Removes duplicate entries, keeping the first occurrence of each.
fn deduplicate(entries: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    entries
        .iter()
        .filter(|e| seen.insert(e.as_str()))
        .cloned()
        .collect()
}

fn trim_to_max(entries: &[String]) -> Vec<String> {
    entries.iter().take(MAX_RECENT).cloned().collect()
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
