//! Content API routes.

use crate::handlers::{
    create_code_comparison, create_hero_section, create_roadmap_item, create_sdk_feature, create_sdk_showcase,
    get_code_comparisons, get_community_stats, get_featured_sdks, get_hero_section, get_landing_page_data,
    get_roadmap_items, get_sdk_features, update_community_stats,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn content_routes(state: AppState) -> Router {
    Router::new()
        .route("/landing", get(get_landing_page_data))
        .route("/hero", post(create_hero_section).get(get_hero_section))
        .route("/sdks", post(create_sdk_showcase))
        .route("/sdks/featured", get(get_featured_sdks))
        .route("/sdks/:sdk_id/features", get(get_sdk_features))
        .route("/sdk-features", post(create_sdk_feature))
        .route("/code-comparisons", post(create_code_comparison).get(get_code_comparisons))
        .route("/community-stats", get(get_community_stats).patch(update_community_stats))
        .route("/roadmap", post(create_roadmap_item).get(get_roadmap_items))
        .with_state(state)
}
