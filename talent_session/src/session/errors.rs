use thiserror::Error;

use crate::api::ApiError;

/// Errors the session layer surfaces to callers.
///
/// Initialization and mid-session failures are never here: they are
/// recovered locally to a deterministic `Unauthenticated` state. The one
/// intentionally surfaced class is a rejected login/registration, which the
/// calling screen displays; session state is left untouched.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Credential error: {0}")]
    Credential(#[from] ApiError),
}
