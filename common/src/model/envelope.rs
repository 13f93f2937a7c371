//! The `{ success, data?, error?, message? }` envelope every management API
//! endpoint answers with.

use serde::{Deserialize, Serialize};

/// Response envelope of the management API.
///
/// `data` is only authoritative when `success` is true. Failure payloads
/// usually carry a human-readable `error`; some successes carry a `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn failed(error: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            message: None,
        }
    }

    /// Converts the payload, keeping the status fields.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            message: self.message,
        }
    }

    /// The server-supplied error text, ignoring blank strings.
    pub fn error_text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Payload of `GET /health`. It is not wrapped in `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub supabase_connected: bool,
}
