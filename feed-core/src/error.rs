use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки получения данных из удалённого API.
pub enum FeedError {
    /// Запрос не дошёл до сервера или соединение оборвалось.
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил неуспешным статусом.
    #[error("http error {status}: {message}")]
    Http {
        /// HTTP-статус ответа.
        status: u16,
        /// Текст ошибки.
        message: String,
    },

    /// Тело ответа не удалось разобрать как JSON ожидаемой формы.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Результат операций ядра ленты.
pub type FeedResult<T> = Result<T, FeedError>;

impl FeedError {
    /// Строит ошибку по HTTP-статусу, подставляя типовой текст, если
    /// сервер не прислал своего.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| match status {
                404 => "resource not found".to_string(),
                500..=599 => "server error".to_string(),
                _ => format!("http status {status}"),
            });

        Self::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_uses_fallback_for_blank_message() {
        let err = FeedError::from_status(404, Some("   ".to_string()));
        assert_eq!(
            err,
            FeedError::Http {
                status: 404,
                message: "resource not found".to_string()
            }
        );
    }

    #[test]
    fn from_status_keeps_server_message() {
        let err = FeedError::from_status(503, Some("maintenance".to_string()));
        assert_eq!(err.to_string(), "http error 503: maintenance");
    }

    #[test]
    fn from_status_formats_unknown_status() {
        let err = FeedError::from_status(418, None);
        assert_eq!(err.to_string(), "http error 418: http status 418");
    }
}
