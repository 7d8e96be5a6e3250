use crate::{
    api::{
        client::{ApiClient, Endpoint},
        models::FeedPage,
    },
    cache::{FeedSnapshot, PageStateCache, SortMode},
    error::SiteResult,
};
use tracing::debug;

/// Filter state of the community feed, as driven by the page controls.
#[derive(Debug, Clone)]
pub struct FeedQuery {
    pub active_type: Option<String>,
    pub sort_mode: SortMode,
    pub search_query: String,
}

impl Default for FeedQuery {
    fn default() -> Self {
        FeedQuery {
            active_type: None,
            sort_mode: SortMode::Newest,
            search_query: String::new(),
        }
    }
}

/// Loads the community feed. A cached snapshot, when present, is returned
/// as-is and the network is skipped; this is what makes back navigation
/// resume where the user left off. Callers are responsible for invalidating
/// the cache when the filters change, so a stored snapshot is trusted.
pub async fn load(
    client: &ApiClient,
    cache: &PageStateCache,
    query: &FeedQuery,
) -> SiteResult<FeedSnapshot> {
    if let Some(snapshot) = cache.get() {
        debug!("Restoring community feed from cache, skipping fetch.");
        return Ok(snapshot);
    }

    let page: FeedPage = client
        .get_json(&Endpoint::CommunityFeed {
            offset: 0,
            sort_mode: query.sort_mode,
            active_type: query.active_type.clone(),
            search_query: query.search_query.clone(),
        })
        .await?;

    let offset = page.posts.len() as u64;
    Ok(FeedSnapshot {
        has_more: offset < page.total,
        posts: page.posts,
        total: page.total,
        offset,
        active_type: query.active_type.clone(),
        sort_mode: query.sort_mode,
        search_query: query.search_query.clone(),
        scroll_y: 0.0,
    })
}

/// Called when navigating away from the feed view; stores the snapshot for
/// the next visit.
pub fn leave(cache: &PageStateCache, snapshot: FeedSnapshot) {
    cache.set(snapshot);
}

/// Called when the cached state is known stale (filter reset, explicit
/// refresh, post created or deleted elsewhere).
pub fn invalidate(cache: &PageStateCache) {
    cache.clear();
}
