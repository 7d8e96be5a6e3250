use crate::{
    api::{
        client::{ApiClient, Endpoint},
        models::{WikiFile, WikiPage},
    },
    error::SiteResult,
};

/// Loads every translation of a wiki document and keys them by locale, so
/// the template can pick the viewer's language directly. Duplicate locales
/// keep the last document returned by the API.
pub async fn load(client: &ApiClient, path: &str) -> SiteResult<WikiPage> {
    let files: Vec<WikiFile> = client
        .get_json(&Endpoint::WikiFiles(path.to_string()))
        .await?;

    Ok(files
        .into_iter()
        .map(|file| (file.locale.clone(), file))
        .collect())
}
