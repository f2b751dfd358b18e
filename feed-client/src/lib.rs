//! Клиентская библиотека для REST API ленты постов.
//!
//! Предоставляет [`FeedClient`] поверх `reqwest` и реализует для него
//! [`feed_core::FeedSource`], так что клиент можно передать прямо в
//! [`feed_core::DataStore::load`].
#![warn(missing_docs)]

mod error;
mod http_client;

use std::time::Duration;

use async_trait::async_trait;
use feed_core::{Comment, FeedResult, FeedSource, Post, User};
use tracing::{info, warn};

pub use error::{FeedClientError, FeedClientResult};

use http_client::HttpClient;

/// Публичный API по умолчанию.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Таймаут запроса по умолчанию.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
/// Клиент для чтения постов, пользователей и комментариев.
pub struct FeedClient {
    http: HttpClient,
}

impl FeedClient {
    /// Создаёт клиент с базовым URL, например `https://jsonplaceholder.typicode.com`.
    pub fn new(base_url: impl Into<String>) -> FeedClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Создаёт клиент с явным таймаутом запроса.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> FeedClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout)?,
        })
    }

    /// Базовый URL API.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Возвращает все посты.
    pub async fn posts(&self) -> FeedClientResult<Vec<Post>> {
        let posts = self.http.list_posts().await?;
        info!(count = posts.len(), "posts fetched");
        Ok(posts)
    }

    /// Возвращает всех пользователей.
    pub async fn users(&self) -> FeedClientResult<Vec<User>> {
        let users = self.http.list_users().await?;
        info!(count = users.len(), "users fetched");
        Ok(users)
    }

    /// Возвращает комментарии к посту `post_id`.
    pub async fn comments(&self, post_id: i64) -> FeedClientResult<Vec<Comment>> {
        let comments = self.http.list_comments(post_id).await?;
        info!(post_id, count = comments.len(), "comments fetched");
        Ok(comments)
    }
}

#[async_trait(?Send)]
impl FeedSource for FeedClient {
    async fn fetch_posts(&self) -> FeedResult<Vec<Post>> {
        self.posts().await.map_err(|err| {
            warn!(error = %err, "failed to fetch posts");
            err.into()
        })
    }

    async fn fetch_users(&self) -> FeedResult<Vec<User>> {
        self.users().await.map_err(|err| {
            warn!(error = %err, "failed to fetch users");
            err.into()
        })
    }

    async fn fetch_comments(&self, post_id: i64) -> FeedResult<Vec<Comment>> {
        self.comments(post_id).await.map_err(|err| {
            warn!(post_id, error = %err, "failed to fetch comments");
            err.into()
        })
    }
}
