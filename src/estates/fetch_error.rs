use thiserror::Error;

/// Anything that can go wrong while loading the listings feed. Every variant
/// ends up as the same error flag and message on the view.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}
