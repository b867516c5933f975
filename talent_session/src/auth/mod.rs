mod api;
mod types;

pub use api::AuthApi;
pub use types::{AuthResponse, LoginCredentials, RegisterRequest};
