use futures::future::try_join;

use crate::error::FeedResult;
use crate::models::{Post, User};
use crate::source::FeedSource;

#[derive(Debug, Clone, Default)]
/// Полные коллекции постов и пользователей, загруженные один раз при старте.
///
/// Хранилище только для чтения: после загрузки данные не меняются.
pub struct DataStore {
    posts: Vec<Post>,
    users: Vec<User>,
}

impl DataStore {
    /// Загружает посты и пользователей параллельно.
    ///
    /// Загрузка атомарна: если любой из запросов завершился ошибкой,
    /// возвращается эта ошибка и хранилище не создаётся.
    pub async fn load<S>(source: &S) -> FeedResult<Self>
    where
        S: FeedSource + ?Sized,
    {
        let (posts, users) = try_join(source.fetch_posts(), source.fetch_users()).await?;
        Ok(Self { posts, users })
    }

    /// Собирает хранилище из уже полученных данных.
    pub fn from_parts(posts: Vec<Post>, users: Vec<User>) -> Self {
        Self { posts, users }
    }

    /// Все посты в порядке, в котором их вернул API.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Все пользователи в порядке, в котором их вернул API.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Пользователь по идентификатору.
    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Имя автора поста, если автор известен.
    pub fn author_name(&self, post: &Post) -> Option<&str> {
        self.user(post.user_id).map(|user| user.name.as_str())
    }

    /// `true`, если ни постов, ни пользователей нет.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::FeedError;
    use crate::models::Comment;

    struct FakeSource {
        posts: FeedResult<Vec<Post>>,
        users: FeedResult<Vec<User>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeSource {
        fn new(posts: FeedResult<Vec<Post>>, users: FeedResult<Vec<User>>) -> Self {
            Self {
                posts,
                users,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().expect("lock poisoned").clone()
        }
    }

    #[async_trait(?Send)]
    impl FeedSource for FakeSource {
        async fn fetch_posts(&self) -> FeedResult<Vec<Post>> {
            self.calls.lock().expect("lock poisoned").push("posts");
            self.posts.clone()
        }

        async fn fetch_users(&self) -> FeedResult<Vec<User>> {
            self.calls.lock().expect("lock poisoned").push("users");
            self.users.clone()
        }

        async fn fetch_comments(&self, _post_id: i64) -> FeedResult<Vec<Comment>> {
            Ok(Vec::new())
        }
    }

    fn sample_post(id: i64, user_id: i64, title: &str) -> Post {
        Post {
            id,
            user_id,
            title: title.to_string(),
            body: format!("body {id}"),
        }
    }

    fn sample_user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn load_fetches_posts_and_users() {
        let source = FakeSource::new(
            Ok(vec![sample_post(1, 1, "a"), sample_post(2, 2, "b")]),
            Ok(vec![sample_user(1, "Leanne"), sample_user(2, "Ervin")]),
        );

        let store = DataStore::load(&source).await.expect("load must succeed");

        assert_eq!(store.posts().len(), 2);
        assert_eq!(store.users().len(), 2);
        let mut calls = source.calls();
        calls.sort_unstable();
        assert_eq!(calls, vec!["posts", "users"]);
    }

    #[tokio::test]
    async fn load_fails_when_users_fail() {
        let source = FakeSource::new(
            Ok(vec![sample_post(1, 1, "a")]),
            Err(FeedError::Network("connection reset".to_string())),
        );

        let result = DataStore::load(&source).await;
        assert_eq!(
            result.map(|store| store.posts().len()),
            Err(FeedError::Network("connection reset".to_string()))
        );
    }

    #[tokio::test]
    async fn load_fails_when_posts_fail() {
        let source = FakeSource::new(
            Err(FeedError::from_status(500, None)),
            Ok(vec![sample_user(1, "Leanne")]),
        );

        let result = DataStore::load(&source).await;
        assert!(matches!(result, Err(FeedError::Http { status: 500, .. })));
    }

    #[test]
    fn author_name_resolves_known_user() {
        let store = DataStore::from_parts(
            vec![sample_post(1, 2, "a"), sample_post(2, 9, "b")],
            vec![sample_user(2, "Ervin Howell")],
        );

        assert_eq!(store.author_name(&store.posts()[0]), Some("Ervin Howell"));
        assert_eq!(store.author_name(&store.posts()[1]), None);
    }

    #[test]
    fn default_store_is_empty() {
        assert!(DataStore::default().is_empty());
        assert!(!DataStore::from_parts(vec![], vec![sample_user(1, "x")]).is_empty());
    }
}
