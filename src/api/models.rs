use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Player record as returned by `/players/{uid}` and `/players/@{name}`.
/// Only the fields the loaders look at are typed; everything else is kept
/// as-is and passed through to the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub uid: u64,
    pub name: String,
    /// Epoch milliseconds until which the supporter perks are active.
    pub supporter_until: Option<i64>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// Response of `/deathCount/{uid}/{levelid}`. One bucket per percent.
#[derive(Debug, Deserialize)]
pub struct DeathCountResponse {
    pub count: Option<Vec<i64>>,
}

/// One wiki document, keyed by locale on the wiki page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiFile {
    pub locale: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// Funding progress shown on the supporter page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupporterProgress {
    #[serde(default)]
    pub server_cost_percent: f64,
    #[serde(default)]
    pub minecraft_server_percent: f64,
}

/// One page of the community feed from `/community/posts`.
#[derive(Debug, Deserialize)]
pub struct FeedPage {
    pub posts: Vec<Value>,
    pub total: u64,
}

// Shaped page data returned by the loaders.

#[derive(Debug, Serialize)]
pub struct PostPage {
    pub post: Value,
    pub comments: Vec<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub record: Value,
    pub death_count: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct PlayerPage {
    pub player: Player,
    pub records: Vec<Value>,
}

pub type WikiPage = HashMap<String, WikiFile>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupporterPage {
    pub top_buyers: Vec<Value>,
    pub progress: SupporterProgress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionsPage {
    pub records: Vec<Value>,
    pub level_submissions: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct AdminSubmissionsPage {
    pub data: Vec<Value>,
}
