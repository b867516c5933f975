use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, watch};

use crate::auth::{AuthResponse, LoginCredentials, RegisterRequest};
use crate::navigation::NavigationIntent;
use crate::session::errors::SessionError;
use crate::session::types::{AuthBackend, ProfileFetcher, Session};
use crate::storage::TokenStore;
use crate::token;

/// Owner of the canonical session state.
///
/// Constructed exactly once per application instance by the hosting shell
/// and shared from there; tests build as many isolated instances as they
/// need. State is published through a `watch` channel, so observers see
/// either the pre-transition or the fully resolved post-transition value.
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
    auth: Arc<dyn AuthBackend>,
    profiles: Arc<dyn ProfileFetcher>,
    state: watch::Sender<Session>,
    init_gate: Mutex<bool>,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn TokenStore>,
        auth: Arc<dyn AuthBackend>,
        profiles: Arc<dyn ProfileFetcher>,
    ) -> Self {
        let (state, _) = watch::channel(Session::Initializing);
        Self {
            store,
            auth,
            profiles,
            state,
            init_gate: Mutex::new(false),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver that wakes on every state publication. Dropping receivers
    /// is fine; a transition resolving with no one listening is a no-op.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Establish session state from whatever the token store holds.
    ///
    /// Runs once per application load. Concurrent invocations serialize on
    /// the init gate: the first resolves the state, the rest wake after it
    /// and return the already-published snapshot without a second profile
    /// fetch. Every failure path is recovered to `Unauthenticated` with the
    /// store cleared, so the UI can never show authenticated content on
    /// unconfirmed credentials.
    pub async fn initialize(&self) -> Session {
        let mut resolved = self.init_gate.lock().await;
        if *resolved {
            return self.snapshot();
        }

        let session = self.resolve_startup_session().await;
        // Store side effects happened above; only now is the state visible.
        self.state.send_replace(session.clone());
        *resolved = true;
        session
    }

    async fn resolve_startup_session(&self) -> Session {
        let Some(stored) = self.store.get() else {
            tracing::debug!("no stored token, starting unauthenticated");
            return Session::Unauthenticated;
        };

        let claims = match token::decode(&stored) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!("discarding undecodable stored token: {}", e);
                self.store.clear();
                return Session::Unauthenticated;
            }
        };

        if token::is_expired(&claims, Utc::now().timestamp_millis()) {
            tracing::debug!("discarding expired stored token (exp={})", claims.exp);
            self.store.clear();
            return Session::Unauthenticated;
        }

        match self.profiles.fetch_profile().await {
            Ok(profile) => {
                tracing::debug!("session established for user {}", profile.user.id);
                Session::Authenticated(profile.user)
            }
            Err(e) => {
                tracing::warn!("profile fetch failed during initialization: {}", e);
                self.store.clear();
                Session::Unauthenticated
            }
        }
    }

    /// Exchange credentials for a token and enter `Authenticated`.
    ///
    /// The token is persisted before the state is published: observers must
    /// never see an authenticated session backed by an empty store. On
    /// rejection the state is untouched and the error goes back to the
    /// login screen for display.
    pub async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<NavigationIntent, SessionError> {
        let response = self.auth.login(credentials).await?;

        self.store.set(&response.access_token);
        self.state
            .send_replace(Session::Authenticated(response.user));
        tracing::debug!("login succeeded for {}", credentials.username);
        Ok(NavigationIntent::ToDashboard)
    }

    /// Create an account. Does not authenticate: the new account goes back
    /// through the login screen, so neither the store nor the session state
    /// changes here.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, SessionError> {
        Ok(self.auth.register(request).await?)
    }

    /// Drop the session unconditionally. Cannot fail.
    pub fn logout(&self) -> NavigationIntent {
        self.store.clear();
        self.state.send_replace(Session::Unauthenticated);
        tracing::debug!("logged out");
        NavigationIntent::ToLogin
    }
}
