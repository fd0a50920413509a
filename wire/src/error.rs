//! Failure taxonomy for calls against the admin API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A success response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a response body, keeping the API's `message`.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<crate::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API rejected the session token.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        self.status() == Some(401)
    }

    /// Banner text for a failed `action` (e.g. `"approve captain"`).
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => format!("Failed to {action}: {message}"),
            Self::Status { message: None, .. } | Self::Decode(_) => format!("Failed to {action}"),
            Self::Transport(message) => message.clone(),
        }
    }
}
