//! Error types returned by the HTTP client and services.
//!
//! `ApiError` is the single error type every service call returns. It is `Clone`
//! and `PartialEq` so views can keep it inside a signal and render it in an alert
//! banner through [`ApiError::user_message`].

use serde::Deserialize;
use thiserror::Error;

/// Failure of a request against the league backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    ///
    /// `message` is taken from the body's `message` (or `error`) field when present,
    /// otherwise from the default message for the status code.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        /// Field-level errors reported by the backend under `errors`.
        validation_errors: Vec<String>,
    },

    /// No response was received from the backend.
    #[error("Unable to reach the server: {0}")]
    Network(String),

    /// The request payload could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// The response body could not be parsed into the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Token refresh failed or no refresh token was available.
    #[error("Your session has expired, please log in again")]
    SessionExpired,
}

/// Error body as produced by the backend.
///
/// Spring error payloads use `message`, some handlers use `error`; both are accepted.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

impl ApiError {
    /// Builds a status error from a raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let dto = serde_json::from_str::<ErrorDto>(body).unwrap_or_default();

        let message = dto
            .message
            .or(dto.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_status_message(status).to_string());

        let validation_errors = dto
            .errors
            .into_iter()
            .map(|value| match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Object(ref map) => map
                    .get("defaultMessage")
                    .or_else(|| map.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string()),
                other => other.to_string(),
            })
            .collect();

        ApiError::Status {
            status,
            message,
            validation_errors,
        }
    }

    /// HTTP status of the failure, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::SessionExpired => Some(401),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message suitable for an alert banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(_) => "Unable to connect to the server".to_string(),
            ApiError::Encode(_) => "Error while preparing the request".to_string(),
            other => other.to_string(),
        }
    }

    /// Prefix used when logging a failure, matching the status family.
    pub fn log_prefix(&self) -> &'static str {
        match self.status() {
            Some(400) => "Bad request",
            Some(401) => "Unauthorized",
            Some(403) => "Forbidden",
            Some(404) => "Not found",
            Some(409) => "Conflict",
            Some(422) => "Unprocessable entity",
            Some(500) => "Server error",
            Some(_) => "HTTP error",
            None => match self {
                ApiError::Network(_) => "Connection error",
                _ => "Request error",
            },
        }
    }
}

/// Fallback message for a status code when the body carries none.
pub fn default_status_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid data",
        401 => "Authentication required",
        403 => "You don't have the required permissions",
        404 => "The requested resource does not exist",
        409 => "The resource already exists or conflicts with existing data",
        422 => "The provided data is invalid",
        500 => "An error occurred on the server",
        _ => "An error occurred",
    }
}

#[cfg(test)]
mod test;
