use crate::{
    api::{
        client::{ApiClient, Endpoint},
        models::{Player, PlayerPage},
    },
    error::{SiteError, SiteResult},
    utils::is_supporter_active,
};
use serde_json::Value;

/// Loads the plain player page at `/player/{uid}`. Active supporters are
/// served from their vanity route instead, so this redirects them there.
pub async fn load(client: &ApiClient, uid: u64) -> SiteResult<PlayerPage> {
    let player: Player = client.get_json(&Endpoint::Player(uid)).await?;

    if is_supporter_active(player.supporter_until) {
        return Err(SiteError::Redirect(307, format!("/@{}", player.name)));
    }

    get_player_data(client, player).await
}

/// Loads the vanity profile at `/@{username}`. The route only exists while
/// the supporter period is active; everyone else gets a 404.
pub async fn load_by_name(client: &ApiClient, username: &str) -> SiteResult<PlayerPage> {
    let player: Player = client
        .get_json(&Endpoint::PlayerByName(username.to_string()))
        .await?;

    if !is_supporter_active(player.supporter_until) {
        return Err(SiteError::NotFound("Not found".to_string()));
    }

    get_player_data(client, player).await
}

/// Shared assembly for both player routes: the player plus the records they
/// submitted.
async fn get_player_data(client: &ApiClient, player: Player) -> SiteResult<PlayerPage> {
    let records: Vec<Value> = client
        .get_json(&Endpoint::PlayerSubmissions(player.uid))
        .await?;

    Ok(PlayerPage { player, records })
}
