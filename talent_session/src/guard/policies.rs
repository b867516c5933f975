//! Route-authorization policies.
//!
//! All three are pure functions of a session snapshot plus a caller-supplied
//! role allow-list. The shell re-evaluates them on every state publication
//! (see `SessionHandle::subscribe`), not just once at mount.

use crate::navigation::NavigationIntent;
use crate::session::{Session, UserType};

use super::types::RouteAccess;

/// Guard for screens that require an authenticated user with one of the
/// allowed roles.
///
/// While the session initializes, no decision is made; acting on the
/// transient start state would redirect users who are about to be
/// confirmed. Wrong-role users land on the dashboard; there is no
/// dedicated forbidden screen.
pub fn require_auth(session: &Session, allowed_roles: &[UserType]) -> RouteAccess {
    match session {
        Session::Initializing => RouteAccess::Pending,
        Session::Unauthenticated => RouteAccess::Redirect(NavigationIntent::ToLogin),
        Session::Authenticated(user) => {
            if allowed_roles.contains(&user.user_type) {
                RouteAccess::Grant
            } else {
                RouteAccess::Redirect(NavigationIntent::ToDashboard)
            }
        }
    }
}

/// Guard for screens meant for signed-out visitors (login, registration).
///
/// Initializing still renders the wrapped content: a login form flashing
/// away during startup is worse than showing it to a user who turns out to
/// be authenticated a moment later.
pub fn require_guest(session: &Session) -> RouteAccess {
    match session {
        Session::Authenticated(_) => RouteAccess::Redirect(NavigationIntent::ToDashboard),
        Session::Initializing | Session::Unauthenticated => RouteAccess::Grant,
    }
}

/// Non-redirecting capability predicate for conditional UI.
///
/// Does not distinguish `Initializing` from `Unauthenticated`, so it must
/// never be the sole protection of a guarded screen during the
/// initialization window; that is `require_auth`'s job.
pub fn can_access(session: &Session, allowed_roles: &[UserType]) -> bool {
    match session.user() {
        Some(user) => allowed_roles.contains(&user.user_type),
        None => false,
    }
}
