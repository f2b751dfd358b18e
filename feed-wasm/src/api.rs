use async_trait::async_trait;
use feed_core::{Comment, FeedError, FeedResult, FeedSource, Post, User};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const API_BASE_URL: &str = match option_env!("FEED_API_URL") {
    Some(value) => value,
    None => "https://jsonplaceholder.typicode.com",
};

/// Источник данных поверх `fetch` браузера.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HttpSource;

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> FeedResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| FeedError::Decode(err.to_string()))
}

async fn parse_error_body(response: gloo_net::http::Response) -> FeedError {
    let status = response.status();
    let text = response.text().await.ok();

    FeedError::from_status(status, text.filter(|text| text.trim() != "{}"))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> FeedResult<T> {
    let response = Request::get(&endpoint(path))
        .send()
        .await
        .map_err(|err| FeedError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

#[async_trait(?Send)]
impl FeedSource for HttpSource {
    async fn fetch_posts(&self) -> FeedResult<Vec<Post>> {
        get_json("/posts").await
    }

    async fn fetch_users(&self) -> FeedResult<Vec<User>> {
        get_json("/users").await
    }

    async fn fetch_comments(&self, post_id: i64) -> FeedResult<Vec<Comment>> {
        get_json(&format!("/comments?postId={post_id}")).await
    }
}
