//! Pure helpers around the external compatibility-scoring algorithm.
//!
//! The algorithm itself stays opaque: callers pass it in as a function, and
//! the profile it scores against is an explicit argument on every call.

use std::cmp::Ordering;

use crate::jobs::Job;
use crate::profile::Profile;

use super::types::{CompatibilityScore, JobWithCompatibility};

/// Annotate each job with the scorer's verdict for this profile.
pub fn score_jobs<F>(profile: &Profile, jobs: Vec<Job>, score: F) -> Vec<JobWithCompatibility>
where
    F: Fn(&Profile, &Job) -> CompatibilityScore,
{
    jobs.into_iter()
        .map(|job| {
            let verdict = score(profile, &job);
            JobWithCompatibility {
                job,
                compatibility: Some(verdict),
            }
        })
        .collect()
}

/// Highest score first; unscored jobs sink to the end. Stable, so equally
/// scored jobs keep their listing order.
pub fn sort_by_compatibility(mut jobs: Vec<JobWithCompatibility>) -> Vec<JobWithCompatibility> {
    jobs.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    jobs
}

/// Keep only jobs scoring at least `min_score`; unscored jobs count as 0.
pub fn filter_by_min_score(
    jobs: Vec<JobWithCompatibility>,
    min_score: f64,
) -> Vec<JobWithCompatibility> {
    jobs.into_iter()
        .filter(|job| job.score() >= min_score)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{User, UserType};
    use chrono::Utc;

    fn profile() -> Profile {
        Profile {
            id: 1,
            user_id: 1,
            first_name: None,
            last_name: None,
            bio: None,
            location: "Remote".to_string(),
            has_disability: false,
            disability_type: None,
            disability_description: None,
            accessibility_needs: None,
            experience_summary: "Python backend, 4 years".to_string(),
            created_at: Utc::now(),
            user: User {
                id: 1,
                email: "a@b.com".to_string(),
                user_type: UserType::Candidate,
                is_active: true,
            },
        }
    }

    fn job(id: i64, title: &str) -> Job {
        Job {
            id,
            title: title.to_string(),
            description: String::new(),
            location: None,
            required_skills: vec![],
        }
    }

    fn scored(id: i64, score: f64) -> JobWithCompatibility {
        JobWithCompatibility {
            job: job(id, "j"),
            compatibility: Some(CompatibilityScore {
                score,
                matched_skills: vec![],
            }),
        }
    }

    #[test]
    fn test_score_jobs_annotates_every_job() {
        // Given a scorer that keys off the job id
        let jobs = vec![job(1, "a"), job(2, "b")];

        // When scoring against an explicit profile
        let scored = score_jobs(&profile(), jobs, |_, job| CompatibilityScore {
            score: job.id as f64 * 10.0,
            matched_skills: vec![],
        });

        // Then every job carries its verdict
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].score(), 10.0);
        assert_eq!(scored[1].score(), 20.0);
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        // Given jobs with a tie and an unscored one
        let jobs = vec![
            scored(1, 50.0),
            scored(2, 80.0),
            JobWithCompatibility {
                job: job(3, "unscored"),
                compatibility: None,
            },
            scored(4, 50.0),
        ];

        let sorted = sort_by_compatibility(jobs);

        // Then: best first, tie keeps listing order, unscored last
        let ids: Vec<i64> = sorted.iter().map(|j| j.job.id).collect();
        assert_eq!(ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_filter_by_min_score() {
        let jobs = vec![
            scored(1, 30.0),
            scored(2, 70.0),
            JobWithCompatibility {
                job: job(3, "unscored"),
                compatibility: None,
            },
        ];

        let kept = filter_by_min_score(jobs, 50.0);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].job.id, 2);
    }

    #[test]
    fn test_filter_with_zero_threshold_keeps_everything() {
        let jobs = vec![
            scored(1, 0.0),
            JobWithCompatibility {
                job: job(2, "unscored"),
                compatibility: None,
            },
        ];

        assert_eq!(filter_by_min_score(jobs, 0.0).len(), 2);
    }
}
