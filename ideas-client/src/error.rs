use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибка цикла загрузки списка идей.
///
/// Снаружи это один вид сбоя (запрос не удался), варианты лишь уточняют
/// причину для диагностики.
pub enum FetchError {
    /// Запрос не дошёл до сервера или соединение оборвалось.
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил неуспешным статусом.
    #[error("http error {status}: {message}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
        /// Тело ответа или текст по умолчанию.
        message: String,
    },

    /// Ответ пришёл, но его не удалось разобрать.
    #[error("decode error: {0}")]
    Decode(String),

    /// Базовый URL API некорректен.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Результат операций `ideas-client`.
pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Строит ошибку по неуспешному статусу; пустое тело заменяется
    /// описанием статуса.
    pub fn from_status(status: u16, body: Option<String>) -> Self {
        let fallback = match status {
            400 => "bad request".to_string(),
            404 => "resource not found".to_string(),
            429 => "too many requests".to_string(),
            500..=599 => "server error".to_string(),
            _ => format!("http status {status}"),
        };

        let message = match body {
            Some(text) if !text.trim().is_empty() => text,
            _ => fallback,
        };

        Self::Status { status, message }
    }

    /// Обрыв при чтении тела ответа. Это сбой транспорта, а не формата:
    /// разбор тела ещё не начинался.
    pub fn body_read(err: impl fmt::Display) -> Self {
        Self::Network(format!("failed to read response body: {err}"))
    }

    #[cfg(feature = "http")]
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), None);
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Network(err.to_string())
    }
}
