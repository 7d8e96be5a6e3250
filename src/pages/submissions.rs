use crate::{
    api::{
        client::{ApiClient, Endpoint},
        models::SubmissionsPage,
    },
    error::SiteResult,
};
use serde_json::Value;

/// Loads a player's own submissions view: their submitted records together
/// with their pending level submissions, fetched in parallel.
pub async fn load(client: &ApiClient, uid: u64) -> SiteResult<SubmissionsPage> {
    let records_endpoint = Endpoint::PlayerSubmissions(uid);
    let level_submissions_endpoint = Endpoint::LevelSubmissionsByUser(uid);
    let (records, level_submissions) = tokio::try_join!(
        client.get_json::<Vec<Value>>(&records_endpoint),
        client.get_json::<Vec<Value>>(&level_submissions_endpoint),
    )?;

    Ok(SubmissionsPage {
        records,
        level_submissions,
    })
}
