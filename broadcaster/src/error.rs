use thiserror::Error;

/// Failure kinds of the dispatch layer.
///
/// Transport failures are folded into synthetic status codes so callers can
/// branch on `ApiResponse::status_code` alone: 408 for a timeout, 500 for a
/// connection or other transport failure.  HTTP errors keep the real code.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("HTTP {status} from {path}")]
    Http { status: u16, path: String },
    #[error("connection failed for {path}: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
        path: String,
    },
    #[error("request timed out for {path}: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
        path: String,
    },
    #[error("request failed for {path}: {source}")]
    Other {
        #[source]
        source: reqwest::Error,
        path: String,
    },
}

impl DispatchError {
    /// Status code reported to callers for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            DispatchError::Http { status, .. } => *status,
            DispatchError::Timeout { .. } => 408,
            DispatchError::Connection { .. } | DispatchError::Other { .. } => 500,
        }
    }
}

/// Startup and construction errors.
#[derive(Debug, Error)]
pub enum BroadcasterError {
    #[error(transparent)]
    Config(#[from] ::config::ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
