use std::sync::LazyLock;

/// Base URL of the backend.
///
/// Default: "http://localhost:8000"
pub static API_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
});

/// Route prefix shared by every backend endpoint.
///
/// Default: "/api/v1"
pub static API_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("API_ROUTE_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()));
