use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiClient, ApiError};
use crate::session::ProfileFetcher;

use super::types::{CvAnalysis, Profile, ProfileUpdate};

/// HTTP implementation of the profile service.
pub struct ProfileApi {
    client: Arc<ApiClient>,
}

impl ProfileApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET {prefix}/profile/me`
    pub async fn get_my_profile(&self) -> Result<Profile, ApiError> {
        self.client.get_json("/profile/me").await
    }

    /// `PUT {prefix}/profile/me`
    pub async fn update_my_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.client.put_json("/profile/me", update).await
    }

    /// `GET {prefix}/profile/cv-analysis`
    pub async fn get_cv_analysis(&self) -> Result<CvAnalysis, ApiError> {
        self.client.get_json("/profile/cv-analysis").await
    }
}

#[async_trait]
impl ProfileFetcher for ProfileApi {
    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.get_my_profile().await
    }
}
