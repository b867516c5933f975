use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::User;

/// Candidate profile as served by the backend, with the identity embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub location: String,
    pub has_disability: bool,
    #[serde(default)]
    pub disability_type: Option<String>,
    #[serde(default)]
    pub disability_description: Option<String>,
    #[serde(default)]
    pub accessibility_needs: Option<String>,
    pub experience_summary: String,
    pub created_at: DateTime<Utc>,
    pub user: User,
}

/// Patch shape for profile updates; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_disability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disability_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disability_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_needs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// AI review of an uploaded CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub strengths: Vec<String>,
    /// Some backend revisions spell this `areas_for_improvement`.
    #[serde(alias = "areas_for_improvement", default)]
    pub improvements: Vec<String>,
    pub suggested_skills: Vec<String>,
    #[serde(default)]
    pub accessibility_notes: Vec<String>,
    #[serde(default)]
    pub keyword_analysis: KeywordAnalysis,
    pub overall_feedback: String,
}
