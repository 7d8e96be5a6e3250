use dlweb::api::client::ApiClient;
use dlweb::cache::PageStateCache;
use dlweb::cli::Cli;
use dlweb::config;
use dlweb::error::{SiteError, SiteResult};
use dlweb::pages;

use clap::Parser;
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config::SETTINGS.get_trace_level())
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    let cli = Cli::parse();
    let client = ApiClient::from_settings();

    info!("Loading route '{}'.", cli.route);
    match load_route(&client, &cli.route).await {
        Ok(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        Err(SiteError::Redirect(status, location)) => {
            println!("redirect ({status}) -> {location}");
            Ok(())
        }
        Err(e) => Err(Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
    }
}

async fn load_route(client: &ApiClient, route: &str) -> SiteResult<Value> {
    let segments = route.trim_matches('/').split('/').collect::<Vec<&str>>();

    let data = match segments.as_slice() {
        ["community"] => {
            // A fresh cache: the preview always fetches.
            let cache = PageStateCache::new();
            let snapshot =
                pages::feed::load(client, &cache, &pages::feed::FeedQuery::default()).await?;
            serde_json::to_value(snapshot)?
        }
        ["community", id] => serde_json::to_value(pages::post::load(client, id).await?)?,
        ["records", uid, level_id] => {
            let uid = uid.parse::<u64>().map_err(|_| SiteError::Parse)?;
            serde_json::to_value(pages::record::load(client, uid, level_id).await?)?
        }
        ["player", uid] => {
            let uid = uid.parse::<u64>().map_err(|_| SiteError::Parse)?;
            serde_json::to_value(pages::player::load(client, uid).await?)?
        }
        [profile] if profile.starts_with('@') => {
            serde_json::to_value(pages::player::load_by_name(client, &profile[1..]).await?)?
        }
        ["wiki", path @ ..] if !path.is_empty() => {
            serde_json::to_value(pages::wiki::load(client, &path.join("/")).await?)?
        }
        ["supporter"] => serde_json::to_value(pages::supporter::load(client).await?)?,
        ["mySubmission", uid] => {
            let uid = uid.parse::<u64>().map_err(|_| SiteError::Parse)?;
            serde_json::to_value(pages::submissions::load(client, uid).await?)?
        }
        ["admin", "levelSubmissions"] => serde_json::to_value(pages::admin::load())?,
        _ => return Err(SiteError::NotFound(format!("No such route: {route}"))),
    };

    Ok(data)
}
