use crate::navigation::NavigationIntent;

/// Verdict of a route guard over a session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session still initializing: render a neutral placeholder and take
    /// no navigation action.
    Pending,
    /// Render the guarded content.
    Grant,
    /// Render nothing; the shell performs the navigation.
    Redirect(NavigationIntent),
}
