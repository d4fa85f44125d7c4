//! Error type shared by every API operation.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Which family of endpoint produced a failure. Auth endpoints report
/// rejections differently from resource endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    Resource,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// Bad local input, or a 4xx the server explained.
    #[error("{0}")]
    Validation(String),

    /// Login or registration rejected.
    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    NotFound(String),

    /// The server refused the bearer token. The stored session has already
    /// been cleared when this is returned.
    #[error("session expired, please log in again")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// JSON error body: `{ "error": "...", "message": "..." }`, both optional.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub(crate) fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    fn text(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

impl ApiError {
    /// Map a non-success status and its body to an error.
    pub(crate) fn from_response(status: StatusCode, body: ErrorBody, endpoint: Endpoint) -> Self {
        let message = body.text();
        let text = || message.clone().unwrap_or_default();

        if status.is_server_error() {
            return ApiError::Server {
                status: status.as_u16(),
                message: text(),
            };
        }

        match endpoint {
            Endpoint::Login => return ApiError::Auth(text()),
            Endpoint::Register => return ApiError::Validation(text()),
            Endpoint::Resource => {}
        }

        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden(text()),
            StatusCode::NOT_FOUND => ApiError::NotFound(text()),
            _ if mentions_missing(message.as_deref()) => ApiError::NotFound(text()),
            _ => ApiError::Validation(text()),
        }
    }

    /// Text to show in a banner. Server-supplied explanations for validation
    /// and auth failures are shown verbatim; everything else uses `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(m) | ApiError::Auth(m) if !m.is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

fn mentions_missing(message: Option<&str>) -> bool {
    let Some(message) = message else {
        return false;
    };
    let lower = message.to_lowercase();
    lower.contains("not found") || lower.contains("does not belong")
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
