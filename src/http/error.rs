use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid endpoint url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{endpoint} responded with status {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}
