use thiserror::Error;

/// Failures of outbound backend calls.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 401. The client has already cleared the token
    /// store and forced navigation to the login screen by the time this
    /// value reaches the caller.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unexpected status {status}: {detail}")]
    UnexpectedStatus { status: u16, detail: String },

    #[error("Response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}
