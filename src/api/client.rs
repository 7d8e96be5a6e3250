use crate::{
    cache::SortMode,
    config,
    error::{SiteError, SiteResult},
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::{fmt, time::Duration};

/// Number of records requested for a player's submissions page.
const SUBMISSIONS_PAGE_END: u32 = 500;

pub enum Endpoint {
    CommunityFeed {
        offset: u64,
        sort_mode: SortMode,
        active_type: Option<String>,
        search_query: String,
    },
    CommunityPost(String),
    PostComments(String),
    Player(u64),
    PlayerByName(String),
    PlayerSubmissions(u64),
    LevelSubmissionsByUser(u64),
    Record(u64, String),
    DeathCount(u64, String),
    WikiFiles(String),
    TopBuyers(u64),
    BuyersProgress(u64),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::CommunityFeed {
                offset,
                sort_mode,
                active_type,
                search_query,
            } => {
                write!(f, "/community/posts?offset={}&sort={}", offset, sort_mode)?;
                if let Some(post_type) = active_type {
                    write!(f, "&type={}", post_type)?;
                }
                if !search_query.is_empty() {
                    write!(f, "&search={}", search_query)?;
                }
                Ok(())
            }
            Endpoint::CommunityPost(id) => {
                write!(f, "/community/posts/{}", id)
            }
            Endpoint::PostComments(id) => {
                write!(f, "/community/posts/{}/comments", id)
            }
            Endpoint::Player(uid) => {
                write!(f, "/players/{}", uid)
            }
            Endpoint::PlayerByName(name) => {
                write!(f, "/players/@{}", name)
            }
            Endpoint::PlayerSubmissions(uid) => {
                write!(f, "/players/{}/submissions?end={}", uid, SUBMISSIONS_PAGE_END)
            }
            Endpoint::LevelSubmissionsByUser(uid) => {
                write!(f, "/level-submissions/user/{}", uid)
            }
            Endpoint::Record(uid, level_id) => {
                write!(f, "/records/{}/{}", uid, level_id)
            }
            Endpoint::DeathCount(uid, level_id) => {
                write!(f, "/deathCount/{}/{}", uid, level_id)
            }
            Endpoint::WikiFiles(path) => {
                write!(f, "/wiki/files/{}", path)
            }
            Endpoint::TopBuyers(interval_ms) => {
                write!(f, "/buyers/top?interval={}", interval_ms)
            }
            Endpoint::BuyersProgress(interval_ms) => {
                write!(f, "/buyers/progress?interval={}", interval_ms)
            }
        }
    }
}

pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
        }
    }

    pub fn from_settings() -> Self {
        let settings = &config::SETTINGS;
        Self::new(
            settings.api_base_url.clone(),
            Duration::new(settings.api_timeout_sec, 0),
        )
    }

    async fn get(&self, endpoint: &Endpoint) -> SiteResult<String> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self.http_client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => response.text().await.map_err(|_| SiteError::Parse),
            status => Err(SiteError::Http(format!("{}", status))),
        }
    }

    /// GET an endpoint and deserialize its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> SiteResult<T> {
        let body = self.get(endpoint).await?;
        Ok(serde_json::from_str::<T>(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(
            Endpoint::CommunityPost("42".to_string()).to_string(),
            "/community/posts/42"
        );
        assert_eq!(
            Endpoint::PostComments("42".to_string()).to_string(),
            "/community/posts/42/comments"
        );
        assert_eq!(Endpoint::Player(118270).to_string(), "/players/118270");
        assert_eq!(
            Endpoint::PlayerByName("zoink".to_string()).to_string(),
            "/players/@zoink"
        );
        assert_eq!(
            Endpoint::PlayerSubmissions(118270).to_string(),
            "/players/118270/submissions?end=500"
        );
        assert_eq!(
            Endpoint::Record(118270, "tartarus".to_string()).to_string(),
            "/records/118270/tartarus"
        );
        assert_eq!(
            Endpoint::DeathCount(118270, "tartarus".to_string()).to_string(),
            "/deathCount/118270/tartarus"
        );
        assert_eq!(
            Endpoint::WikiFiles("rules/submission".to_string()).to_string(),
            "/wiki/files/rules/submission"
        );
        assert_eq!(
            Endpoint::TopBuyers(2_592_000_000).to_string(),
            "/buyers/top?interval=2592000000"
        );
    }

    #[test]
    fn feed_endpoint_omits_empty_filters() {
        let endpoint = Endpoint::CommunityFeed {
            offset: 0,
            sort_mode: SortMode::Newest,
            active_type: None,
            search_query: String::new(),
        };
        assert_eq!(endpoint.to_string(), "/community/posts?offset=0&sort=newest");

        let endpoint = Endpoint::CommunityFeed {
            offset: 20,
            sort_mode: SortMode::Best,
            active_type: Some("guide".to_string()),
            search_query: "wave".to_string(),
        };
        assert_eq!(
            endpoint.to_string(),
            "/community/posts?offset=20&sort=best&type=guide&search=wave"
        );
    }
}
