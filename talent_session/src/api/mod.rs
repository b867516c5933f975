mod client;
mod config;
mod errors;

pub use client::ApiClient;
pub use config::{API_BASE_URL, API_ROUTE_PREFIX};
pub use errors::ApiError;
