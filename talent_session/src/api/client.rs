use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::navigation::{NavigationIntent, Navigator};
use crate::storage::TokenStore;

use super::config::{API_BASE_URL, API_ROUTE_PREFIX};
use super::errors::ApiError;

/// Backend HTTP client.
///
/// Every outbound request carries `Authorization: Bearer <token>` when the
/// token store holds a token, and none otherwise. Any 401 response clears
/// the store and forces navigation to the login screen before the error
/// propagates. This is the only path by which server-side token
/// invalidation re-enters client state, and it bypasses the session state
/// machine entirely, so callers must treat any in-flight request as
/// potentially resetting the session.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(base_url: Url, store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
            navigator,
        }
    }

    /// Client for the base URL configured via `API_BASE_URL`.
    pub fn from_env(
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(API_BASE_URL.as_str())?;
        Ok(Self::new(base_url, store, navigator))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let prefixed = format!("{}{}", API_ROUTE_PREFIX.as_str(), path);
        Ok(self.base_url.join(&prefixed)?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.http.get(self.endpoint(path)?)).await?;
        Self::decode_json(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.http.post(self.endpoint(path)?).json(body))
            .await?;
        Self::decode_json(response).await
    }

    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.http.post(self.endpoint(path)?).form(form))
            .await?;
        Self::decode_json(response).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.http.put(self.endpoint(path)?).json(body))
            .await?;
        Self::decode_json(response).await
    }

    /// Send the request with bearer injection and centralized status
    /// handling.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.store.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Global session reset: revoked or tampered tokens die here,
            // whatever screen issued the request.
            tracing::warn!("401 from backend, resetting session");
            self.store.clear();
            self.navigator.navigate(NavigationIntent::ToLogin);
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let detail = Self::error_detail(response).await;
            tracing::debug!("backend error {}: {}", status, detail);
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Best-effort extraction of the backend's `detail` message.
    async fn error_detail(response: Response) -> String {
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
            .unwrap_or(body)
    }
}
