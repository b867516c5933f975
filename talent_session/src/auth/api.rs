use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiClient, ApiError};
use crate::session::AuthBackend;

use super::types::{AuthResponse, LoginCredentials, RegisterRequest};

/// HTTP implementation of the token-minting backend operations.
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthBackend for AuthApi {
    /// `POST {prefix}/auth/token`. Form-encoded, unlike the rest of the
    /// API.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.client
            .post_form(
                "/auth/token",
                &[
                    ("username", credentials.username.as_str()),
                    ("password", credentials.password.as_str()),
                ],
            )
            .await
    }

    /// `POST {prefix}/auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client.post_json("/auth/register", request).await
    }
}
