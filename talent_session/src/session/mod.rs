mod errors;
mod main;
mod types;

pub use errors::SessionError;
pub use main::{SessionHandle, SessionManager};
pub use types::{AuthBackend, ProfileFetcher, Session, User, UserType};
