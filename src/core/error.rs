use reqwest::StatusCode;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for ids, config values and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record not found, either locally or on the backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend refused the lifecycle transition (e.g. restoring an active record)
    #[error("Rejected by API: {0}")]
    Rejected(String),

    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A request for this record is already pending
    #[error("Request already in flight for record {0}")]
    InFlight(String),

    /// Any other non-success API response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not carry a list where the entity adapter expected one
    #[error("Unexpected response envelope: {0}")]
    Envelope(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// API could not be reached (connection refused, timeout)
    #[error("API unavailable: {0}")]
    Unavailable(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Errors raised inside the client middleware stack
    #[error("HTTP middleware error: {0}")]
    Middleware(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML route override parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Terminal and file I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest_middleware::Error> for AppError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => AppError::HttpClient(e),
            reqwest_middleware::Error::Middleware(e) => AppError::Middleware(e.to_string()),
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        AppError::Rejected(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn envelope(msg: impl Into<String>) -> Self {
        AppError::Envelope(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Map a non-success API status and its body into the matching variant
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = excerpt(body);
        match status {
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::Rejected(message)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(message),
            _ => AppError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status the backend answered with, when the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Pull a readable message out of an error body, preferring `message`/`error` fields
fn excerpt(body: &str) -> String {
    const MAX: usize = 200;

    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error", "msg"]
                .iter()
                .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
        });

    let text = from_json.unwrap_or_else(|| body.trim().to_string());
    if text.is_empty() {
        return "empty response body".to_string();
    }
    if text.chars().count() > MAX {
        let cut: String = text.chars().take(MAX).collect();
        format!("{}...", cut)
    } else {
        text
    }
}
