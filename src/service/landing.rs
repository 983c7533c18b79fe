//! Landing page aggregation: one snapshot of every section for a single render.

use super::content::ContentService;
use super::ordering::sort_roadmap;
use crate::error::AppError;
use crate::models::{LandingPageData, SdkFeature, SdkShowcase};

impl ContentService {
    /// Reads all six sections and assembles them.
    ///
    /// Reads are independent and run concurrently; features are read after the
    /// featured SDKs and only for their ids. No transaction spans the reads, so
    /// under concurrent writes the sections may come from different moments.
    /// The hero and stats checks run only once every read has finished.
    pub async fn get_landing_page_data(&self) -> Result<LandingPageData, AppError> {
        let store = &self.store;
        let featured = async {
            let sdks: Vec<SdkShowcase> = store.featured_sdk_showcases().await?;
            let features: Vec<SdkFeature> = if sdks.is_empty() {
                Vec::new()
            } else {
                let ids: Vec<i32> = sdks.iter().map(|s| s.id).collect();
                store.sdk_features_for_any(&ids).await?
            };
            Ok::<_, AppError>((sdks, features))
        };

        let result = tokio::try_join!(
            store.latest_hero_section(),
            featured,
            store.code_comparisons(),
            store.latest_community_stats(),
            store.roadmap_items(),
        );
        let (hero, (featured_sdks, sdk_features), code_comparisons, community_stats, mut roadmap) =
            result.inspect_err(|e| tracing::error!(error = %e, "landing page read failed"))?;

        let hero = hero.ok_or(AppError::MissingRequired("hero section"));
        let community_stats = community_stats.ok_or(AppError::MissingRequired("community stats"));
        let (hero, community_stats) = match (hero, community_stats) {
            (Ok(hero), Ok(stats)) => (hero, stats),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!(error = %e, "landing page incomplete");
                return Err(e);
            }
        };

        sort_roadmap(&mut roadmap);
        tracing::debug!(
            featured_sdks = featured_sdks.len(),
            sdk_features = sdk_features.len(),
            code_comparisons = code_comparisons.len(),
            roadmap = roadmap.len(),
            "landing page assembled"
        );
        Ok(LandingPageData {
            hero,
            featured_sdks,
            sdk_features,
            code_comparisons,
            community_stats,
            roadmap,
        })
    }
}
