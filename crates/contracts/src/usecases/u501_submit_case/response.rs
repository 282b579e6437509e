use serde::{Deserialize, Serialize};

use super::error::SubmitError;
use crate::domain::a002_verdict::VerdictResponse;

/// Success envelope: `{"response": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub response: VerdictResponse,
}

/// Failure envelope: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// Status and body text as received, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Maps a raw response to the verdict or a typed error.
pub fn interpret_response(raw: &RawResponse) -> Result<VerdictResponse, SubmitError> {
    if !raw.is_success() {
        let message = serde_json::from_str::<ApiErrorResponse>(&raw.body)
            .ok()
            .map(|e| e.error);
        return Err(SubmitError::Api {
            status: raw.status,
            message,
        });
    }

    serde_json::from_str::<ApiResponse>(&raw.body)
        .map(|envelope| envelope.response)
        .map_err(|e| SubmitError::Decode(e.to_string()))
}
