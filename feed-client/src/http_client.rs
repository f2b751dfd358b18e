use std::time::Duration;

use feed_core::{Comment, Post, User};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::{FeedClientError, FeedClientResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostDto {
    id: i64,
    user_id: i64,
    title: String,
    body: String,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentDto {
    #[serde(default)]
    post_id: i64,
    #[serde(default)]
    id: i64,
    name: String,
    #[serde(default)]
    email: String,
    body: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentsQuery {
    post_id: i64,
}

impl From<PostDto> for Post {
    fn from(value: PostDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            title: value.title,
            body: value.body,
        }
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl From<CommentDto> for Comment {
    fn from(value: CommentDto) -> Self {
        Self {
            post_id: value.post_id,
            id: value.id,
            name: value.name,
            email: value.email,
            body: value.body,
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API ленты (`/posts`, `/users`, `/comments`).
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт HTTP-клиент с базовым URL API и общим таймаутом запроса.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FeedClientResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(FeedClientError::InvalidConfig(
                "base url must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Базовый URL API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> FeedClientError {
        let status = response.status();

        let message = response
            .text()
            .await
            .ok()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty() && text != "{}");
        FeedClientError::from_http_status(status, message)
    }

    /// универсальный helper для GET-запросов с json-ответом
    async fn get_json<TQuery, TRes>(&self, path: &str, query: Option<&TQuery>) -> FeedClientResult<TRes>
    where
        TQuery: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "GET");

        let mut request = self.client.request(Method::GET, url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(FeedClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(FeedClientError::from_reqwest)
    }

    /// Возвращает все посты.
    pub async fn list_posts(&self) -> FeedClientResult<Vec<Post>> {
        let dtos: Vec<PostDto> = self.get_json::<(), _>("/posts", None).await?;
        Ok(dtos.into_iter().map(Post::from).collect())
    }

    /// Возвращает всех пользователей.
    pub async fn list_users(&self) -> FeedClientResult<Vec<User>> {
        let dtos: Vec<UserDto> = self.get_json::<(), _>("/users", None).await?;
        Ok(dtos.into_iter().map(User::from).collect())
    }

    /// Возвращает комментарии к посту.
    pub async fn list_comments(&self, post_id: i64) -> FeedClientResult<Vec<Comment>> {
        let query = CommentsQuery { post_id };
        let dtos: Vec<CommentDto> = self.get_json("/comments", Some(&query)).await?;
        Ok(dtos.into_iter().map(Comment::from).collect())
    }
}
