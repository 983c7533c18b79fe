//! Storage seam: one method per storage statement.
//!
//! Every method is a single statement against one table. Timestamps are supplied
//! by the caller so that ordering by them is deterministic across backends.

mod memory;
mod postgres;
pub mod schema;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use schema::{ensure_database_exists, ensure_tables};

use crate::error::AppError;
use crate::models::*;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Full set of counters for a freshly inserted stats row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsValues {
    pub github_stars: i32,
    pub total_downloads: i32,
    pub contributors: i32,
    pub repositories: i32,
}

impl From<&UpdateCommunityStats> for StatsValues {
    /// Omitted counters start at zero.
    fn from(input: &UpdateCommunityStats) -> Self {
        Self {
            github_stars: input.github_stars.unwrap_or(0),
            total_downloads: input.total_downloads.unwrap_or(0),
            contributors: input.contributors.unwrap_or(0),
            repositories: input.repositories.unwrap_or(0),
        }
    }
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Round-trip to the backend; used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;

    async fn insert_hero_section(&self, input: &CreateHeroSection, now: DateTime<Utc>) -> Result<HeroSection, AppError>;
    /// Most recently updated hero section.
    async fn latest_hero_section(&self) -> Result<Option<HeroSection>, AppError>;

    async fn insert_sdk_showcase(&self, input: &CreateSdkShowcase, now: DateTime<Utc>) -> Result<SdkShowcase, AppError>;
    async fn sdk_showcase_exists(&self, id: i32) -> Result<bool, AppError>;
    /// Featured SDKs, newest first.
    async fn featured_sdk_showcases(&self) -> Result<Vec<SdkShowcase>, AppError>;

    async fn insert_sdk_feature(&self, input: &CreateSdkFeature, now: DateTime<Utc>) -> Result<SdkFeature, AppError>;
    async fn sdk_features_for(&self, sdk_id: i32) -> Result<Vec<SdkFeature>, AppError>;
    /// Features owned by any of `sdk_ids`, in insertion order.
    async fn sdk_features_for_any(&self, sdk_ids: &[i32]) -> Result<Vec<SdkFeature>, AppError>;

    async fn insert_code_comparison(
        &self,
        input: &CreateCodeComparison,
        now: DateTime<Utc>,
    ) -> Result<CodeComparison, AppError>;
    /// All comparisons in insertion order.
    async fn code_comparisons(&self) -> Result<Vec<CodeComparison>, AppError>;

    /// Any stats row (lowest id). Used to decide insert vs update.
    async fn first_community_stats(&self) -> Result<Option<CommunityStats>, AppError>;
    /// Most recently updated stats row.
    async fn latest_community_stats(&self) -> Result<Option<CommunityStats>, AppError>;
    async fn insert_community_stats(&self, values: StatsValues, now: DateTime<Utc>) -> Result<CommunityStats, AppError>;
    /// Sets only the counters present in `input`; always sets `updated_at`. None if the row vanished.
    async fn update_community_stats(
        &self,
        id: i32,
        input: &UpdateCommunityStats,
        now: DateTime<Utc>,
    ) -> Result<Option<CommunityStats>, AppError>;

    async fn insert_roadmap_item(&self, input: &CreateRoadmapItem, now: DateTime<Utc>) -> Result<RoadmapItem, AppError>;
    /// All roadmap items in insertion order; display order is applied by the service.
    async fn roadmap_items(&self) -> Result<Vec<RoadmapItem>, AppError>;
}
