//! Ядро ленты постов: модели, хранилище данных и контроллер представления.
//!
//! Крейт не делает сетевых запросов сам. Транспорт подключается через трейт
//! [`FeedSource`], который реализуют `feed-client` (нативный `reqwest`) и
//! `feed-wasm` (`gloo-net` в браузере).
//!
//! Типичный порядок работы:
//! 1. [`DataStore::load`] загружает посты и пользователей;
//! 2. [`ViewController::new`] строит представление по постам из хранилища;
//! 3. обработчики ввода вызывают сеттеры контроллера, рендер берёт [`Page`].
#![warn(missing_docs)]

mod error;
mod models;
mod source;
mod store;
mod view;

pub use error::{FeedError, FeedResult};
pub use models::{Comment, Post, SortDirection, User};
pub use source::FeedSource;
pub use store::DataStore;
pub use view::{PAGE_SIZE, Page, ViewController, ViewState, compare_titles, matches, paginate};
