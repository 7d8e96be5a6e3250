use crate::{
    api::{
        client::{ApiClient, Endpoint},
        models::{SupporterPage, SupporterProgress},
    },
    error::SiteResult,
};
use serde_json::Value;
use tracing::error;

/// Window over which top buyers and funding progress are computed.
const SUPPORT_WINDOW_MS: u64 = 30 * 24 * 60 * 60 * 1000; // 30 days

/// Loads the supporter page. The page must render even when the buyers API
/// is down, so any fetch failure falls back to an empty list and zeroed
/// progress instead of propagating.
pub async fn load(client: &ApiClient) -> SiteResult<SupporterPage> {
    let top_buyers_endpoint = Endpoint::TopBuyers(SUPPORT_WINDOW_MS);
    let progress_endpoint = Endpoint::BuyersProgress(SUPPORT_WINDOW_MS);
    let (top_buyers_res, progress_res) = tokio::join!(
        client.get_json::<Vec<Value>>(&top_buyers_endpoint),
        client.get_json::<SupporterProgress>(&progress_endpoint),
    );

    match (top_buyers_res, progress_res) {
        (Ok(top_buyers), Ok(progress)) => Ok(SupporterPage {
            top_buyers,
            progress,
        }),
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to fetch top buyers: {e}");
            Ok(SupporterPage {
                top_buyers: vec![],
                progress: SupporterProgress::default(),
            })
        }
    }
}
