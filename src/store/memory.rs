//! In-process content store for development and tests. Mirrors the ordering and
//! foreign-key behaviour of the PostgreSQL tables.

use super::{ContentStore, StatsValues};
use crate::error::AppError;
use crate::models::*;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use tokio::sync::RwLock;

/// Rows plus a SERIAL-style id sequence. Ids are never reused.
struct Table<T> {
    rows: Vec<T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), last_id: 0 }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
struct Tables {
    heroes: Table<HeroSection>,
    sdks: Table<SdkShowcase>,
    features: Table<SdkFeature>,
    comparisons: Table<CodeComparison>,
    stats: Table<CommunityStats>,
    roadmap: Table<RoadmapItem>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage-administration delete; features of the showcase go with it.
    pub async fn delete_sdk_showcase(&self, id: i32) -> bool {
        let mut t = self.tables.write().await;
        let before = t.sdks.rows.len();
        t.sdks.rows.retain(|s| s.id != id);
        let removed = t.sdks.rows.len() != before;
        if removed {
            t.features.rows.retain(|f| f.sdk_id != id);
        }
        removed
    }

    pub async fn sdk_feature_count(&self) -> usize {
        self.tables.read().await.features.rows.len()
    }

    pub async fn community_stats_count(&self) -> usize {
        self.tables.read().await.stats.rows.len()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert_hero_section(&self, input: &CreateHeroSection, now: DateTime<Utc>) -> Result<HeroSection, AppError> {
        let mut t = self.tables.write().await;
        let row = HeroSection {
            id: t.heroes.next_id(),
            headline: input.headline.clone(),
            subheadline: input.subheadline.clone(),
            mission_statement: input.mission_statement.clone(),
            primary_cta_text: input.primary_cta_text.clone(),
            primary_cta_url: input.primary_cta_url.clone(),
            secondary_cta_text: input.secondary_cta_text.clone(),
            secondary_cta_url: input.secondary_cta_url.clone(),
            code_snippet: input.code_snippet.clone(),
            created_at: now,
            updated_at: now,
        };
        t.heroes.rows.push(row.clone());
        Ok(row)
    }

    async fn latest_hero_section(&self) -> Result<Option<HeroSection>, AppError> {
        let t = self.tables.read().await;
        Ok(t.heroes.rows.iter().max_by_key(|h| (h.updated_at, h.id)).cloned())
    }

    async fn insert_sdk_showcase(&self, input: &CreateSdkShowcase, now: DateTime<Utc>) -> Result<SdkShowcase, AppError> {
        let mut t = self.tables.write().await;
        let row = SdkShowcase {
            id: t.sdks.next_id(),
            name: input.name.clone(),
            version: input.version.clone(),
            description: input.description.clone(),
            install_command: input.install_command.clone(),
            code_example: input.code_example.clone(),
            documentation_url: input.documentation_url.clone(),
            github_url: input.github_url.clone(),
            package_url: input.package_url.clone(),
            is_featured: input.is_featured,
            created_at: now,
            updated_at: now,
        };
        t.sdks.rows.push(row.clone());
        Ok(row)
    }

    async fn sdk_showcase_exists(&self, id: i32) -> Result<bool, AppError> {
        let t = self.tables.read().await;
        Ok(t.sdks.rows.iter().any(|s| s.id == id))
    }

    async fn featured_sdk_showcases(&self) -> Result<Vec<SdkShowcase>, AppError> {
        let t = self.tables.read().await;
        let mut rows: Vec<SdkShowcase> = t.sdks.rows.iter().filter(|s| s.is_featured).cloned().collect();
        rows.sort_by_key(|s| Reverse((s.created_at, s.id)));
        Ok(rows)
    }

    async fn insert_sdk_feature(&self, input: &CreateSdkFeature, now: DateTime<Utc>) -> Result<SdkFeature, AppError> {
        let mut t = self.tables.write().await;
        if !t.sdks.rows.iter().any(|s| s.id == input.sdk_id) {
            return Err(AppError::ForeignKey { kind: "sdk showcase", id: input.sdk_id });
        }
        let row = SdkFeature {
            id: t.features.next_id(),
            sdk_id: input.sdk_id,
            name: input.name.clone(),
            description: input.description.clone(),
            icon: input.icon.clone(),
            created_at: now,
        };
        t.features.rows.push(row.clone());
        Ok(row)
    }

    async fn sdk_features_for(&self, sdk_id: i32) -> Result<Vec<SdkFeature>, AppError> {
        let t = self.tables.read().await;
        Ok(t.features.rows.iter().filter(|f| f.sdk_id == sdk_id).cloned().collect())
    }

    async fn sdk_features_for_any(&self, sdk_ids: &[i32]) -> Result<Vec<SdkFeature>, AppError> {
        let t = self.tables.read().await;
        Ok(t.features
            .rows
            .iter()
            .filter(|f| sdk_ids.contains(&f.sdk_id))
            .cloned()
            .collect())
    }

    async fn insert_code_comparison(
        &self,
        input: &CreateCodeComparison,
        now: DateTime<Utc>,
    ) -> Result<CodeComparison, AppError> {
        let mut t = self.tables.write().await;
        let row = CodeComparison {
            id: t.comparisons.next_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            before_code: input.before_code.clone(),
            after_code: input.after_code.clone(),
            before_label: input.before_label.clone(),
            after_label: input.after_label.clone(),
            created_at: now,
            updated_at: now,
        };
        t.comparisons.rows.push(row.clone());
        Ok(row)
    }

    async fn code_comparisons(&self) -> Result<Vec<CodeComparison>, AppError> {
        Ok(self.tables.read().await.comparisons.rows.clone())
    }

    async fn first_community_stats(&self) -> Result<Option<CommunityStats>, AppError> {
        Ok(self.tables.read().await.stats.rows.first().cloned())
    }

    async fn latest_community_stats(&self) -> Result<Option<CommunityStats>, AppError> {
        let t = self.tables.read().await;
        Ok(t.stats.rows.iter().max_by_key(|s| (s.updated_at, s.id)).cloned())
    }

    async fn insert_community_stats(&self, values: StatsValues, now: DateTime<Utc>) -> Result<CommunityStats, AppError> {
        let mut t = self.tables.write().await;
        let row = CommunityStats {
            id: t.stats.next_id(),
            github_stars: values.github_stars,
            total_downloads: values.total_downloads,
            contributors: values.contributors,
            repositories: values.repositories,
            updated_at: now,
        };
        t.stats.rows.push(row.clone());
        Ok(row)
    }

    async fn update_community_stats(
        &self,
        id: i32,
        input: &UpdateCommunityStats,
        now: DateTime<Utc>,
    ) -> Result<Option<CommunityStats>, AppError> {
        let mut t = self.tables.write().await;
        let Some(row) = t.stats.rows.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(v) = input.github_stars {
            row.github_stars = v;
        }
        if let Some(v) = input.total_downloads {
            row.total_downloads = v;
        }
        if let Some(v) = input.contributors {
            row.contributors = v;
        }
        if let Some(v) = input.repositories {
            row.repositories = v;
        }
        row.updated_at = now;
        Ok(Some(row.clone()))
    }

    async fn insert_roadmap_item(&self, input: &CreateRoadmapItem, now: DateTime<Utc>) -> Result<RoadmapItem, AppError> {
        let mut t = self.tables.write().await;
        let row = RoadmapItem {
            id: t.roadmap.next_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            status: input.status,
            expected_date: input.expected_date.clone(),
            priority: input.priority,
            created_at: now,
            updated_at: now,
        };
        t.roadmap.rows.push(row.clone());
        Ok(row)
    }

    async fn roadmap_items(&self) -> Result<Vec<RoadmapItem>, AppError> {
        Ok(self.tables.read().await.roadmap.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn sdk(name: &str, featured: bool) -> CreateSdkShowcase {
        CreateSdkShowcase {
            name: name.into(),
            version: "1.0.0".into(),
            description: "d".into(),
            install_command: "pip install x".into(),
            code_example: "import x".into(),
            documentation_url: "https://docs".into(),
            github_url: "https://github".into(),
            package_url: "https://pypi".into(),
            is_featured: featured,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_per_table() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let a = store.insert_sdk_showcase(&sdk("a", true), now).await.unwrap();
        let b = store.insert_sdk_showcase(&sdk("b", false), now).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        let stats = store.insert_community_stats(StatsValues::default(), now).await.unwrap();
        assert_eq!(stats.id, 1);
    }

    #[tokio::test]
    async fn featured_newest_first() {
        let store = MemoryStore::new();
        let t0 = Utc::now();
        store.insert_sdk_showcase(&sdk("old", true), t0).await.unwrap();
        store.insert_sdk_showcase(&sdk("hidden", false), t0 + TimeDelta::seconds(1)).await.unwrap();
        store.insert_sdk_showcase(&sdk("new", true), t0 + TimeDelta::seconds(2)).await.unwrap();
        let names: Vec<String> = store
            .featured_sdk_showcases()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn feature_insert_enforces_parent() {
        let store = MemoryStore::new();
        let input = CreateSdkFeature { sdk_id: 9, name: "n".into(), description: "d".into(), icon: None };
        let err = store.insert_sdk_feature(&input, Utc::now()).await.unwrap_err();
        assert!(matches!(err, AppError::ForeignKey { id: 9, .. }));
        assert_eq!(store.sdk_feature_count().await, 0);
    }

    #[tokio::test]
    async fn deleting_showcase_cascades_to_features() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let parent = store.insert_sdk_showcase(&sdk("a", true), now).await.unwrap();
        let other = store.insert_sdk_showcase(&sdk("b", true), now).await.unwrap();
        for sdk_id in [parent.id, parent.id, other.id] {
            let input = CreateSdkFeature { sdk_id, name: "n".into(), description: "d".into(), icon: None };
            store.insert_sdk_feature(&input, now).await.unwrap();
        }
        assert!(store.delete_sdk_showcase(parent.id).await);
        assert_eq!(store.sdk_feature_count().await, 1);
        assert!(store.sdk_features_for(parent.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_stats_row_is_none() {
        let store = MemoryStore::new();
        let res = store
            .update_community_stats(3, &UpdateCommunityStats::default(), Utc::now())
            .await
            .unwrap();
        assert!(res.is_none());
    }
}
