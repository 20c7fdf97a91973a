use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Callers treat every variant the same way (degrade the view); the split
/// exists so logs say which layer actually failed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. Carries the fixed per-endpoint message only, no
    /// status detail.
    #[error("{0}")]
    RequestFailed(&'static str),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
