use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::auth::{AuthResponse, LoginCredentials, RegisterRequest};
use crate::profile::Profile;

/// The two participant kinds on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Candidate,
    Recruiter,
}

/// Server-confirmed identity. Role decisions are made against this value
/// only, never against client-decoded token claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub user_type: UserType,
    pub is_active: bool,
}

/// Canonical session state.
///
/// `Authenticated` carrying the user makes "authenticated iff a user is
/// present" structural. The token-store side of the invariant holds at the
/// instants the manager re-evaluates it (initialize, login, logout), not
/// continuously against the wall clock.
///
/// `Initializing` is the start state and the gate: route guards take no
/// navigation action until the published state has left it, which happens
/// exactly once per application load.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Initializing,
    Authenticated(User),
    Unauthenticated,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, Session::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

/// Backend operations that mint tokens.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
}

/// Collaborator confirming stored credentials against the server.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    async fn fetch_profile(&self) -> Result<Profile, ApiError>;
}
