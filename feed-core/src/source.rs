use async_trait::async_trait;

use crate::error::FeedResult;
use crate::models::{Comment, Post, User};

/// Источник данных ленты: удалённый API или подмена в тестах.
///
/// Футуры не обязаны быть `Send`: в браузере запросы живут в однопоточном
/// event loop.
#[async_trait(?Send)]
pub trait FeedSource {
    /// `GET /posts`.
    async fn fetch_posts(&self) -> FeedResult<Vec<Post>>;
    /// `GET /users`.
    async fn fetch_users(&self) -> FeedResult<Vec<User>>;
    /// `GET /comments?postId={post_id}`.
    async fn fetch_comments(&self, post_id: i64) -> FeedResult<Vec<Comment>>;
}
