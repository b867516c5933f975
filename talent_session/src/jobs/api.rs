use std::sync::Arc;

use crate::api::{ApiClient, ApiError};

use super::types::Job;

/// HTTP implementation of the job-listing service.
pub struct JobsApi {
    client: Arc<ApiClient>,
}

impl JobsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET {prefix}/jobs`
    pub async fn list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.client.get_json("/jobs").await
    }
}
