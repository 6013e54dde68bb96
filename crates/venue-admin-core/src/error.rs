//! Error types shared by the client and the panel flows.

use thiserror::Error;

/// Failure of one REST exchange.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", http_detail(.status_text, .body))]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Response body is not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Record could not be serialized
    #[error("Serialization error: {0}")]
    Encode(String),
}

fn http_detail<'a>(status_text: &'a str, body: &'a str) -> &'a str {
    if body.trim().is_empty() {
        status_text
    } else {
        body.trim()
    }
}

impl ApiError {
    /// Build an `Http` error, filling an empty status text with the canonical reason.
    pub fn http(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        let mut status_text = status_text.into();
        if status_text.is_empty() {
            status_text = ::http::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown status")
                .to_string();
        }
        ApiError::Http {
            status,
            status_text,
            body: body.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// A required form field is missing or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}: {message}")]
pub struct ValidationError {
    /// Wire name of the offending field
    pub field: &'static str,
    /// Human label shown next to the input
    pub label: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn required(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            message: "campo obligatorio",
        }
    }

    pub fn positive(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            message: "debe ser mayor que cero",
        }
    }
}

/// Fail with `required` when `value` is blank.
pub(crate) fn require(value: &str, field: &'static str, label: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::required(field, label))
    } else {
        Ok(())
    }
}
