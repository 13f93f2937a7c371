//! Error taxonomy of panel operations.
//!
//! Every variant ends its life as exactly one error notification; nothing here
//! is ever retried or propagated past the operation that produced it.

use thiserror::Error;

/// Fixed text shown for every transport-level failure.
pub const CONNECTION_ERROR_TEXT: &str = "Connection error: could not reach the server";

/// Failure of a single panel operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// A local precondition failed; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The API answered with `success: false`.
    #[error("{0}")]
    Business(String),

    /// The API could not be reached or its answer could not be read.
    /// The payload is diagnostic detail for the log, never shown to users.
    #[error("Connection error: could not reach the server")]
    Connection(String),
}

impl PanelError {
    pub fn validation(message: &str) -> Self {
        PanelError::Validation(message.to_string())
    }

    /// Text to show in the notification for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Failure below the envelope level: unreachable host, unexpected status,
/// or a body that is not a valid envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for PanelError {
    fn from(err: TransportError) -> Self {
        PanelError::Connection(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_hide_their_detail() {
        let err: PanelError = TransportError("status 502: <html>".to_string()).into();
        assert_eq!(err.user_message(), CONNECTION_ERROR_TEXT);
        assert_eq!(err, PanelError::Connection("status 502: <html>".to_string()));
    }

    #[test]
    fn business_errors_show_server_text() {
        let err = PanelError::Business("range invalid".to_string());
        assert_eq!(err.user_message(), "range invalid");
    }
}
