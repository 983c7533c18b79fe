//! PostgreSQL-backed content store.

use super::{ContentStore, StatsValues};
use crate::error::AppError;
use crate::models::*;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

const HERO_COLUMNS: &str = "id, headline, subheadline, mission_statement, primary_cta_text, primary_cta_url, \
     secondary_cta_text, secondary_cta_url, code_snippet, created_at, updated_at";
const SDK_COLUMNS: &str = "id, name, version, description, install_command, code_example, documentation_url, \
     github_url, package_url, is_featured, created_at, updated_at";
const FEATURE_COLUMNS: &str = "id, sdk_id, name, description, icon, created_at";
const COMPARISON_COLUMNS: &str =
    "id, title, description, before_code, after_code, before_label, after_label, created_at, updated_at";
const STATS_COLUMNS: &str = "id, github_stars, total_downloads, contributors, repositories, updated_at";
const ROADMAP_COLUMNS: &str = "id, title, description, status, expected_date, priority, created_at, updated_at";

#[async_trait]
impl ContentStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_hero_section(&self, input: &CreateHeroSection, now: DateTime<Utc>) -> Result<HeroSection, AppError> {
        let sql = format!(
            "INSERT INTO hero_sections (headline, subheadline, mission_statement, primary_cta_text, primary_cta_url, \
             secondary_cta_text, secondary_cta_url, code_snippet, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) RETURNING {}",
            HERO_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, HeroSection>(&sql)
            .bind(&input.headline)
            .bind(&input.subheadline)
            .bind(&input.mission_statement)
            .bind(&input.primary_cta_text)
            .bind(&input.primary_cta_url)
            .bind(&input.secondary_cta_text)
            .bind(&input.secondary_cta_url)
            .bind(&input.code_snippet)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn latest_hero_section(&self) -> Result<Option<HeroSection>, AppError> {
        let sql = format!(
            "SELECT {} FROM hero_sections ORDER BY updated_at DESC, id DESC LIMIT 1",
            HERO_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, HeroSection>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_sdk_showcase(&self, input: &CreateSdkShowcase, now: DateTime<Utc>) -> Result<SdkShowcase, AppError> {
        let sql = format!(
            "INSERT INTO sdk_showcases (name, version, description, install_command, code_example, documentation_url, \
             github_url, package_url, is_featured, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10) RETURNING {}",
            SDK_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, SdkShowcase>(&sql)
            .bind(&input.name)
            .bind(&input.version)
            .bind(&input.description)
            .bind(&input.install_command)
            .bind(&input.code_example)
            .bind(&input.documentation_url)
            .bind(&input.github_url)
            .bind(&input.package_url)
            .bind(input.is_featured)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn sdk_showcase_exists(&self, id: i32) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM sdk_showcases WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists.0)
    }

    async fn featured_sdk_showcases(&self) -> Result<Vec<SdkShowcase>, AppError> {
        let sql = format!(
            "SELECT {} FROM sdk_showcases WHERE is_featured = TRUE ORDER BY created_at DESC, id DESC",
            SDK_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, SdkShowcase>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_sdk_feature(&self, input: &CreateSdkFeature, now: DateTime<Utc>) -> Result<SdkFeature, AppError> {
        let sql = format!(
            "INSERT INTO sdk_features (sdk_id, name, description, icon, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            FEATURE_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, SdkFeature>(&sql)
            .bind(input.sdk_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn sdk_features_for(&self, sdk_id: i32) -> Result<Vec<SdkFeature>, AppError> {
        let sql = format!("SELECT {} FROM sdk_features WHERE sdk_id = $1 ORDER BY id", FEATURE_COLUMNS);
        tracing::debug!(sql = %sql, sdk_id, "query");
        let rows = sqlx::query_as::<_, SdkFeature>(&sql)
            .bind(sdk_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn sdk_features_for_any(&self, sdk_ids: &[i32]) -> Result<Vec<SdkFeature>, AppError> {
        if sdk_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {} FROM sdk_features WHERE sdk_id = ANY($1) ORDER BY id",
            FEATURE_COLUMNS
        );
        tracing::debug!(sql = %sql, sdk_ids = ?sdk_ids, "query");
        let rows = sqlx::query_as::<_, SdkFeature>(&sql)
            .bind(sdk_ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_code_comparison(
        &self,
        input: &CreateCodeComparison,
        now: DateTime<Utc>,
    ) -> Result<CodeComparison, AppError> {
        let sql = format!(
            "INSERT INTO code_comparisons (title, description, before_code, after_code, before_label, after_label, \
             created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $7) RETURNING {}",
            COMPARISON_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, CodeComparison>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.before_code)
            .bind(&input.after_code)
            .bind(&input.before_label)
            .bind(&input.after_label)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn code_comparisons(&self) -> Result<Vec<CodeComparison>, AppError> {
        let sql = format!("SELECT {} FROM code_comparisons ORDER BY id", COMPARISON_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, CodeComparison>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn first_community_stats(&self) -> Result<Option<CommunityStats>, AppError> {
        let sql = format!("SELECT {} FROM community_stats ORDER BY id LIMIT 1", STATS_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, CommunityStats>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn latest_community_stats(&self) -> Result<Option<CommunityStats>, AppError> {
        let sql = format!(
            "SELECT {} FROM community_stats ORDER BY updated_at DESC, id DESC LIMIT 1",
            STATS_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, CommunityStats>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_community_stats(&self, values: StatsValues, now: DateTime<Utc>) -> Result<CommunityStats, AppError> {
        let sql = format!(
            "INSERT INTO community_stats (github_stars, total_downloads, contributors, repositories, updated_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            STATS_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, CommunityStats>(&sql)
            .bind(values.github_stars)
            .bind(values.total_downloads)
            .bind(values.contributors)
            .bind(values.repositories)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_community_stats(
        &self,
        id: i32,
        input: &UpdateCommunityStats,
        now: DateTime<Utc>,
    ) -> Result<Option<CommunityStats>, AppError> {
        // NULL parameters leave the column as stored.
        let sql = format!(
            "UPDATE community_stats SET \
             github_stars = COALESCE($1, github_stars), \
             total_downloads = COALESCE($2, total_downloads), \
             contributors = COALESCE($3, contributors), \
             repositories = COALESCE($4, repositories), \
             updated_at = $5 \
             WHERE id = $6 RETURNING {}",
            STATS_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, CommunityStats>(&sql)
            .bind(input.github_stars)
            .bind(input.total_downloads)
            .bind(input.contributors)
            .bind(input.repositories)
            .bind(now)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_roadmap_item(&self, input: &CreateRoadmapItem, now: DateTime<Utc>) -> Result<RoadmapItem, AppError> {
        let sql = format!(
            "INSERT INTO roadmap_items (title, description, status, expected_date, priority, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) RETURNING {}",
            ROADMAP_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, RoadmapItem>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(&input.expected_date)
            .bind(input.priority)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn roadmap_items(&self) -> Result<Vec<RoadmapItem>, AppError> {
        let sql = format!("SELECT {} FROM roadmap_items ORDER BY id", ROADMAP_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, RoadmapItem>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
