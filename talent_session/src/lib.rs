//! talent-session - Client-side session and route-authorization library
//!
//! This crate owns the session lifecycle of the talent platform client:
//! validating the stored bearer token, (re)establishing session state on
//! load, publishing that state to concurrent consumers, and gating screens
//! by user role. Redirects are expressed as `NavigationIntent` values the
//! hosting shell interprets; the shell builds the session context exactly
//! once at startup.

mod api;
mod auth;
mod compat;
mod guard;
mod jobs;
mod navigation;
mod profile;
mod session;
mod storage;
mod token;

// Session state machine and the consumer-facing handle
pub use session::{
    AuthBackend, ProfileFetcher, Session, SessionError, SessionHandle, SessionManager, User,
    UserType,
};

// Route guards
pub use guard::{RouteAccess, can_access, require_auth, require_guest};

// Navigation seam
pub use navigation::{NavigationIntent, Navigator, NullNavigator, RecordingNavigator};

// Token persistence and validation
pub use storage::{
    FileTokenStore, InMemoryTokenStore, NoopTokenStore, TOKEN_STORE_PATH, TokenStore,
};
pub use token::{Claims, TokenError, decode, is_expired};

// Backend services
pub use api::{API_BASE_URL, API_ROUTE_PREFIX, ApiClient, ApiError};
pub use auth::{AuthApi, AuthResponse, LoginCredentials, RegisterRequest};
pub use jobs::{Job, JobsApi};
pub use profile::{CvAnalysis, KeywordAnalysis, Profile, ProfileApi, ProfileUpdate};

// Compatibility helpers
pub use compat::{
    CompatibilityScore, JobWithCompatibility, filter_by_min_score, score_jobs,
    sort_by_compatibility,
};
