use serde::{Deserialize, Serialize};

use crate::session::UserType;

/// Claim set carried by the bearer token.
///
/// `user_type` may be embedded by some backend revisions. It is decoded for
/// diagnostics only: authorization decisions always come from the
/// server-confirmed user on the session, never from this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier.
    pub sub: String,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}
