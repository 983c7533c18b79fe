//! Input rules that the types alone do not express.

use crate::error::AppError;
use crate::models::UpdateCommunityStats;

pub struct RequestValidator;

impl RequestValidator {
    /// Counters are non-negative. Absent fields are not checked.
    pub fn validate_stats(input: &UpdateCommunityStats) -> Result<(), AppError> {
        for (name, value) in [
            ("github_stars", input.github_stars),
            ("total_downloads", input.total_downloads),
            ("contributors", input.contributors),
            ("repositories", input.repositories),
        ] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(AppError::Validation(format!("{} must be at least 0", name)));
                }
            }
        }
        Ok(())
    }
}
