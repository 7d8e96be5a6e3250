use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Sort order of the community feed, as selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Newest,
    Best,
    Recommended,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortMode::Newest => {
                write!(f, "newest")
            }
            SortMode::Best => {
                write!(f, "best")
            }
            SortMode::Recommended => {
                write!(f, "recommended")
            }
        }
    }
}

/// Snapshot of community-feed browsing state, stored when the user navigates
/// away from the feed so that coming back can resume without re-fetching.
///
/// The cache never inspects `posts`; they are kept as raw JSON values.
/// Consistency between `total`, `offset` and `has_more` is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub posts: Vec<serde_json::Value>,
    pub total: u64,
    pub offset: u64,
    pub has_more: bool,
    pub active_type: Option<String>,
    pub sort_mode: SortMode,
    pub search_query: String,
    pub scroll_y: f64,
}

type SharedSnapshot = Arc<Mutex<Option<FeedSnapshot>>>;

/// Single-slot store for the community-feed snapshot. Holds zero or one
/// entry, replaced or cleared wholesale, last writer wins. Cloning the
/// cache clones the handle, not the slot.
#[derive(Clone)]
pub struct PageStateCache {
    data: SharedSnapshot,
}

impl PageStateCache {
    pub fn new() -> PageStateCache {
        PageStateCache {
            data: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the stored snapshot, or `None` if the slot is empty.
    pub fn get(&self) -> Option<FeedSnapshot> {
        let data = self.data.lock().unwrap();
        data.clone()
    }

    /// Unconditionally overwrites the slot, discarding any previous entry.
    /// The entry is not validated.
    pub fn set(&self, entry: FeedSnapshot) {
        let mut data = self.data.lock().unwrap();
        *data = Some(entry);
    }

    /// Resets the slot to empty. Clearing an empty slot is a no-op.
    pub fn clear(&self) {
        let mut data = self.data.lock().unwrap();
        *data = None;
    }
}

impl Default for PageStateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> FeedSnapshot {
        FeedSnapshot {
            posts: vec![json!({"id": 1, "title": "first"}), json!({"id": 2})],
            total: 50,
            offset: 2,
            has_more: true,
            active_type: None,
            sort_mode: SortMode::Newest,
            search_query: String::new(),
            scroll_y: 340.0,
        }
    }

    #[test]
    fn fresh_cache_is_empty() {
        let cache = PageStateCache::new();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let cache = PageStateCache::new();
        let entry = snapshot();
        cache.set(entry.clone());
        assert_eq!(cache.get(), Some(entry));
    }

    #[test]
    fn second_set_replaces_first() {
        let cache = PageStateCache::new();
        cache.set(snapshot());

        let replacement = FeedSnapshot {
            posts: vec![json!({"id": 3})],
            total: 1,
            offset: 1,
            has_more: false,
            active_type: Some("guide".to_string()),
            sort_mode: SortMode::Best,
            search_query: "extreme".to_string(),
            scroll_y: 0.0,
        };
        cache.set(replacement.clone());

        assert_eq!(cache.get(), Some(replacement));
    }

    #[test]
    fn clear_resets_to_empty() {
        let cache = PageStateCache::new();
        cache.set(snapshot());
        cache.clear();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let cache = PageStateCache::new();
        cache.clear();
        cache.clear();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn inconsistent_entries_are_stored_as_given() {
        // The cache performs no validation; offset > total and a negative
        // scroll position are stored and returned untouched.
        let cache = PageStateCache::new();
        let entry = FeedSnapshot {
            posts: vec![],
            total: 3,
            offset: 10,
            has_more: true,
            active_type: None,
            sort_mode: SortMode::Recommended,
            search_query: String::new(),
            scroll_y: -12.5,
        };
        cache.set(entry.clone());
        assert_eq!(cache.get(), Some(entry));
    }

    #[test]
    fn clones_share_the_slot() {
        let cache = PageStateCache::new();
        let handle = cache.clone();
        handle.set(snapshot());
        assert_eq!(cache.get(), Some(snapshot()));
        cache.clear();
        assert_eq!(handle.get(), None);
    }
}
