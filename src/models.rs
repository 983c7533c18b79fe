//! Landing page content records, their create/update inputs, and the aggregated payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct HeroSection {
    pub id: i32,
    pub headline: String,
    pub subheadline: String,
    pub mission_statement: String,
    pub primary_cta_text: String,
    pub primary_cta_url: String,
    pub secondary_cta_text: String,
    pub secondary_cta_url: String,
    pub code_snippet: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHeroSection {
    pub headline: String,
    pub subheadline: String,
    pub mission_statement: String,
    pub primary_cta_text: String,
    pub primary_cta_url: String,
    pub secondary_cta_text: String,
    pub secondary_cta_url: String,
    pub code_snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SdkShowcase {
    pub id: i32,
    pub name: String,
    pub version: String,
    pub description: String,
    pub install_command: String,
    pub code_example: String,
    pub documentation_url: String,
    pub github_url: String,
    /// Package registry page (PyPI, crates.io, npm...).
    pub package_url: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSdkShowcase {
    pub name: String,
    pub version: String,
    pub description: String,
    pub install_command: String,
    pub code_example: String,
    pub documentation_url: String,
    pub github_url: String,
    pub package_url: String,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SdkFeature {
    pub id: i32,
    pub sdk_id: i32,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSdkFeature {
    pub sdk_id: i32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct CodeComparison {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub before_code: String,
    pub after_code: String,
    pub before_label: String,
    pub after_label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCodeComparison {
    pub title: String,
    pub description: String,
    pub before_code: String,
    pub after_code: String,
    pub before_label: String,
    pub after_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct CommunityStats {
    pub id: i32,
    pub github_stars: i32,
    pub total_downloads: i32,
    pub contributors: i32,
    pub repositories: i32,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for the stats record. Omitted fields keep their stored value
/// (or start at zero when the record is first created).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCommunityStats {
    #[serde(default)]
    pub github_stars: Option<i32>,
    #[serde(default)]
    pub total_downloads: Option<i32>,
    #[serde(default)]
    pub contributors: Option<i32>,
    #[serde(default)]
    pub repositories: Option<i32>,
}

/// Roadmap item status. Variant order is the PostgreSQL enum order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "roadmap_status", rename_all = "snake_case")]
pub enum RoadmapStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl RoadmapStatus {
    pub const ALL: [RoadmapStatus; 3] = [Self::Planned, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for RoadmapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: RoadmapStatus,
    /// Free text ("Q3 2025", "Soon").
    pub expected_date: Option<String>,
    /// Lower is more urgent.
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_priority() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoadmapItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: RoadmapStatus,
    #[serde(default)]
    pub expected_date: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: i32,
}

/// Everything the landing page renders, read in one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPageData {
    pub hero: HeroSection,
    pub featured_sdks: Vec<SdkShowcase>,
    pub sdk_features: Vec<SdkFeature>,
    pub code_comparisons: Vec<CodeComparison>,
    pub community_stats: CommunityStats,
    pub roadmap: Vec<RoadmapItem>,
}
