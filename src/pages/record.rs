use crate::{
    api::{
        client::{ApiClient, Endpoint},
        models::{DeathCountResponse, RecordPage},
    },
    error::{SiteError, SiteResult},
};
use serde_json::Value;

/// One death-count bucket per completion percent.
const DEATH_COUNT_BUCKETS: usize = 100;

/// Loads a player's record on a level together with its death counts.
/// Death counts are optional data; anything missing or malformed becomes a
/// run of zeroed buckets. A missing or error-marked record is a 404.
pub async fn load(client: &ApiClient, uid: u64, level_id: &str) -> SiteResult<RecordPage> {
    let record_endpoint = Endpoint::Record(uid, level_id.to_string());
    let death_count_endpoint = Endpoint::DeathCount(uid, level_id.to_string());
    let (record_res, death_count_res) = tokio::join!(
        client.get_json::<Value>(&record_endpoint),
        client.get_json::<DeathCountResponse>(&death_count_endpoint),
    );

    let record = record_res.map_err(|_| SiteError::NotFound("Record not found".to_string()))?;
    if record.is_null() || record.get("error").is_some() {
        return Err(SiteError::NotFound("Record not found".to_string()));
    }

    let death_count = death_count_res
        .ok()
        .and_then(|data| data.count)
        .unwrap_or_else(|| vec![0; DEATH_COUNT_BUCKETS]);

    Ok(RecordPage {
        record,
        death_count,
    })
}
