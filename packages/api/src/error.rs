//! Error types for backend access and configuration.

/// Failure talking to the hosted backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered, but refused the request.
    #[error("{message}")]
    Auth { status: u16, message: String },

    /// The backend failed or throttled the request (5xx, 429, or an unclassified status).
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a backend refusal or failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Missing or malformed backend settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("invalid backend url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("anon key must not be empty")]
    EmptyKey,
}
