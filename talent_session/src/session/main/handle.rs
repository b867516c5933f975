use std::sync::Arc;

use tokio::sync::watch;

use crate::auth::{AuthResponse, LoginCredentials, RegisterRequest};
use crate::navigation::NavigationIntent;
use crate::session::errors::SessionError;
use crate::session::types::{Session, User};

use super::manager::SessionManager;

/// Consumer-facing projection of the session.
///
/// Cheap to clone and hand to every screen; a handle can only be obtained
/// from a constructed [`SessionManager`], so there is no way to read
/// session state outside the scope where the shell created the context.
#[derive(Clone)]
pub struct SessionHandle {
    manager: Arc<SessionManager>,
}

impl SessionHandle {
    pub fn new(manager: Arc<SessionManager>) -> Self {
        Self { manager }
    }

    pub fn snapshot(&self) -> Session {
        self.manager.snapshot()
    }

    /// Wakes on every state publication; guard checks re-run per change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.manager.subscribe()
    }

    pub fn user(&self) -> Option<User> {
        self.manager.snapshot().user().cloned()
    }

    pub fn is_initializing(&self) -> bool {
        self.manager.snapshot().is_initializing()
    }

    pub fn is_authenticated(&self) -> bool {
        self.manager.snapshot().is_authenticated()
    }

    pub async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<NavigationIntent, SessionError> {
        self.manager.login(credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, SessionError> {
        self.manager.register(request).await
    }

    pub fn logout(&self) -> NavigationIntent {
        self.manager.logout()
    }
}
