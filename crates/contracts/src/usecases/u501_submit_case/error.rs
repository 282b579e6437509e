use thiserror::Error;

use crate::shared::i18n::{translate, Language};

/// Failure of a case submission after validation passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Non-success HTTP status; `message` is the server's `error` field if it sent one.
    #[error("service returned HTTP {status}")]
    Api { status: u16, message: Option<String> },
    /// Transport-level failure (DNS, CORS, connection reset, ...).
    #[error("network error: {0}")]
    Network(String),
    /// Success status but the body was not `{"response": {...}}`.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The request body could not be assembled.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// Aborted by the user. Never shown.
    #[error("request cancelled")]
    Cancelled,
}

impl SubmitError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SubmitError::Cancelled)
    }

    /// Text for the error notification: the server's own message when present,
    /// otherwise a localized generic message.
    pub fn user_message(&self, language: Language) -> String {
        match self {
            SubmitError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            SubmitError::Network(_) => translate(language, "networkError").to_string(),
            SubmitError::Cancelled => String::new(),
            _ => translate(language, "genericError").to_string(),
        }
    }
}
