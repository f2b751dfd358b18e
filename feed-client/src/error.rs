use feed_core::FeedError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `feed-client`.
pub enum FeedClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Запрошенный ресурс не найден.
    #[error("not found")]
    NotFound,

    /// Сервер ответил неуспешным статусом.
    #[error("unexpected status {status}: {message}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
        /// Текст ошибки из тела ответа или типовой.
        message: String,
    },

    /// Некорректная конфигурация клиента (например, пустой базовый URL).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Результат операций `feed-client`.
pub type FeedClientResult<T> = Result<T, FeedClientError>;

impl FeedClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::Status {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

impl From<FeedClientError> for FeedError {
    fn from(value: FeedClientError) -> Self {
        match value {
            FeedClientError::Http(err) if err.is_decode() => Self::Decode(err.to_string()),
            FeedClientError::Http(err) => Self::Network(err.to_string()),
            FeedClientError::NotFound => Self::from_status(404, None),
            FeedClientError::Status { status, message } => Self::from_status(status, Some(message)),
            FeedClientError::InvalidConfig(message) => Self::Network(message),
        }
    }
}
