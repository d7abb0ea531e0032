//! Client Errors

use thiserror::Error;

/// Failure of a backend request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` comes from the `{error}` body when present
    #[error("server responded {status}: {}", message.as_deref().unwrap_or("no details"))]
    Server { status: u16, message: Option<String> },

    /// Response body was not the expected JSON
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a notification: the server's message if it sent one,
    /// otherwise `fallback` for server errors and `connection` for transport errors.
    pub fn user_message(&self, fallback: &str, connection: &str) -> String {
        match self {
            ApiError::Server { message: Some(msg), .. } if !msg.is_empty() => msg.clone(),
            ApiError::Server { .. } | ApiError::Decode(_) => fallback.to_string(),
            ApiError::Network(_) => connection.to_string(),
        }
    }
}

/// Input rejected before any request was made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name, ingredients and instructions are required")]
    MissingFields,

    #[error("new category name is required")]
    EmptyCategoryName,
}

pub type ApiResult<T> = Result<T, ApiError>;
