//! Per-entity create and read operations, and the community stats upsert.

use super::ordering::sort_roadmap;
use super::validation::RequestValidator;
use crate::clock::MonotonicClock;
use crate::error::AppError;
use crate::models::*;
use crate::store::{ContentStore, StatsValues};
use std::sync::Arc;

#[derive(Clone)]
pub struct ContentService {
    pub(super) store: Arc<dyn ContentStore>,
    clock: Arc<MonotonicClock>,
}

/// Storage failures are logged here and passed through unchanged.
fn logged<T>(operation: &'static str, result: Result<T, AppError>) -> Result<T, AppError> {
    result.inspect_err(|e| tracing::error!(operation, error = %e, "operation failed"))
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            clock: Arc::new(MonotonicClock::new()),
        }
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    pub async fn create_hero_section(&self, input: CreateHeroSection) -> Result<HeroSection, AppError> {
        let row = logged(
            "create_hero_section",
            self.store.insert_hero_section(&input, self.clock.now()).await,
        )?;
        tracing::info!(id = row.id, "hero section created");
        Ok(row)
    }

    /// Most recently updated hero section, if any.
    pub async fn get_hero_section(&self) -> Result<Option<HeroSection>, AppError> {
        logged("get_hero_section", self.store.latest_hero_section().await)
    }

    pub async fn create_sdk_showcase(&self, input: CreateSdkShowcase) -> Result<SdkShowcase, AppError> {
        let row = logged(
            "create_sdk_showcase",
            self.store.insert_sdk_showcase(&input, self.clock.now()).await,
        )?;
        tracing::info!(id = row.id, featured = row.is_featured, "sdk showcase created");
        Ok(row)
    }

    pub async fn get_featured_sdks(&self) -> Result<Vec<SdkShowcase>, AppError> {
        logged("get_featured_sdks", self.store.featured_sdk_showcases().await)
    }

    /// Fails with `ForeignKey` before writing anything when the owning showcase does not exist.
    pub async fn create_sdk_feature(&self, input: CreateSdkFeature) -> Result<SdkFeature, AppError> {
        let exists = logged("create_sdk_feature", self.store.sdk_showcase_exists(input.sdk_id).await)?;
        if !exists {
            tracing::warn!(sdk_id = input.sdk_id, "sdk feature references unknown sdk showcase");
            return Err(AppError::ForeignKey { kind: "sdk showcase", id: input.sdk_id });
        }
        let row = logged(
            "create_sdk_feature",
            self.store.insert_sdk_feature(&input, self.clock.now()).await,
        )?;
        tracing::info!(id = row.id, sdk_id = row.sdk_id, "sdk feature created");
        Ok(row)
    }

    /// Features of one showcase; empty for an unknown id.
    pub async fn get_sdk_features(&self, sdk_id: i32) -> Result<Vec<SdkFeature>, AppError> {
        logged("get_sdk_features", self.store.sdk_features_for(sdk_id).await)
    }

    pub async fn create_code_comparison(&self, input: CreateCodeComparison) -> Result<CodeComparison, AppError> {
        let row = logged(
            "create_code_comparison",
            self.store.insert_code_comparison(&input, self.clock.now()).await,
        )?;
        tracing::info!(id = row.id, "code comparison created");
        Ok(row)
    }

    pub async fn get_code_comparisons(&self) -> Result<Vec<CodeComparison>, AppError> {
        logged("get_code_comparisons", self.store.code_comparisons().await)
    }

    /// Upsert keyed on existence of any stats row, not on an id.
    ///
    /// With no row, inserts one using zero for every omitted counter. Otherwise
    /// updates only the given counters of the first row and refreshes
    /// `updated_at`. The read and the write are separate statements, so two
    /// concurrent first calls can each insert a row.
    pub async fn update_community_stats(&self, input: UpdateCommunityStats) -> Result<CommunityStats, AppError> {
        RequestValidator::validate_stats(&input)?;
        let existing = logged("update_community_stats", self.store.first_community_stats().await)?;
        let now = self.clock.now();
        if let Some(current) = existing {
            let updated = logged(
                "update_community_stats",
                self.store.update_community_stats(current.id, &input, now).await,
            )?;
            if let Some(row) = updated {
                tracing::info!(id = row.id, "community stats updated");
                return Ok(row);
            }
            tracing::warn!(id = current.id, "community stats row disappeared before update; inserting");
        }
        let row = logged(
            "update_community_stats",
            self.store.insert_community_stats(StatsValues::from(&input), now).await,
        )?;
        tracing::info!(id = row.id, "community stats created");
        Ok(row)
    }

    /// Most recently updated stats row; `NotFound` when none exists.
    pub async fn get_community_stats(&self) -> Result<CommunityStats, AppError> {
        logged("get_community_stats", self.store.latest_community_stats().await)?
            .ok_or_else(|| AppError::NotFound("community stats".into()))
    }

    pub async fn create_roadmap_item(&self, input: CreateRoadmapItem) -> Result<RoadmapItem, AppError> {
        let row = logged(
            "create_roadmap_item",
            self.store.insert_roadmap_item(&input, self.clock.now()).await,
        )?;
        tracing::info!(id = row.id, status = %row.status, priority = row.priority, "roadmap item created");
        Ok(row)
    }

    pub async fn get_roadmap_items(&self) -> Result<Vec<RoadmapItem>, AppError> {
        let mut items = logged("get_roadmap_items", self.store.roadmap_items().await)?;
        sort_roadmap(&mut items);
        Ok(items)
    }
}
