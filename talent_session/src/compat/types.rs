use serde::{Deserialize, Serialize};

use crate::jobs::Job;

/// Verdict of the external scoring algorithm for one profile/job pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    /// 0–100.
    pub score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
}

/// Job annotated with its compatibility verdict. Jobs the scorer could not
/// evaluate carry no verdict and rank last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobWithCompatibility {
    pub job: Job,
    pub compatibility: Option<CompatibilityScore>,
}

impl JobWithCompatibility {
    pub fn score(&self) -> f64 {
        self.compatibility
            .as_ref()
            .map_or(0.0, |verdict| verdict.score)
    }
}
