use thiserror::Error;

/// Failures while decoding a bearer token into its claim set.
///
/// Expiry is deliberately not an error: it is a predicate over decoded
/// claims, see [`crate::token::is_expired`].
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid token format")]
    InvalidFormat,

    #[error("JWT header error: {0}")]
    Header(#[from] jsonwebtoken::errors::Error),

    #[error("Base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}
