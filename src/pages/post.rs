use crate::{
    api::{
        client::{ApiClient, Endpoint},
        models::PostPage,
    },
    error::{SiteError, SiteResult},
};
use serde_json::Value;

/// Loads a single community post with its comments. The post and comment
/// requests run in parallel; a failed comment fetch degrades to an empty
/// list while a failed post fetch is a 404.
pub async fn load(client: &ApiClient, id: &str) -> SiteResult<PostPage> {
    let post_endpoint = Endpoint::CommunityPost(id.to_string());
    let comments_endpoint = Endpoint::PostComments(id.to_string());
    let (post_res, comments_res) = tokio::join!(
        client.get_json::<Value>(&post_endpoint),
        client.get_json::<Vec<Value>>(&comments_endpoint),
    );

    let post = post_res.map_err(|_| SiteError::NotFound("Post not found".to_string()))?;
    let comments = comments_res.unwrap_or_default();

    Ok(PostPage { post, comments })
}
