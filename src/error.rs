use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompassError>;

#[derive(Error, Debug)]
pub enum CompassError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP error! Status: {status}")]
    HttpStatus { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CompassError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CompassError::ConfigError(msg.into())
    }

    /// Everything that can go wrong once a call is under way collapses into
    /// a single "request failed" kind at the nullable boundary.
    pub fn is_request_failure(&self) -> bool {
        !matches!(self, CompassError::ConfigError(_))
    }
}
