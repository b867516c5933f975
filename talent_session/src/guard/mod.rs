mod policies;
mod types;

pub use policies::{can_access, require_auth, require_guest};
pub use types::RouteAccess;
