//! Create and read handlers for each content section.

use super::{parse_body, parse_id};
use crate::error::AppError;
use crate::models::*;
use crate::response::{created, found, listed};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

/// POST /hero
pub async fn create_hero_section(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let input: CreateHeroSection = parse_body(body)?;
    let row = state.content.create_hero_section(input).await?;
    Ok(created(row))
}

/// GET /hero: `data` is null when no hero section exists.
pub async fn get_hero_section(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let row = state.content.get_hero_section().await?;
    Ok(found(row))
}

/// POST /sdks
pub async fn create_sdk_showcase(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let input: CreateSdkShowcase = parse_body(body)?;
    let row = state.content.create_sdk_showcase(input).await?;
    Ok(created(row))
}

/// GET /sdks/featured
pub async fn get_featured_sdks(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = state.content.get_featured_sdks().await?;
    Ok(listed(rows))
}

/// POST /sdk-features
pub async fn create_sdk_feature(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let input: CreateSdkFeature = parse_body(body)?;
    let row = state.content.create_sdk_feature(input).await?;
    Ok(created(row))
}

/// GET /sdks/:sdk_id/features
pub async fn get_sdk_features(
    State(state): State<AppState>,
    Path(sdk_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let sdk_id = parse_id(&sdk_id)?;
    let rows = state.content.get_sdk_features(sdk_id).await?;
    Ok(listed(rows))
}

/// POST /code-comparisons
pub async fn create_code_comparison(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let input: CreateCodeComparison = parse_body(body)?;
    let row = state.content.create_code_comparison(input).await?;
    Ok(created(row))
}

/// GET /code-comparisons
pub async fn get_code_comparisons(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = state.content.get_code_comparisons().await?;
    Ok(listed(rows))
}

/// PATCH /community-stats: upsert; any subset of the four counters.
pub async fn update_community_stats(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let input: UpdateCommunityStats = parse_body(body)?;
    let row = state.content.update_community_stats(input).await?;
    Ok(found(row))
}

/// GET /community-stats
pub async fn get_community_stats(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let row = state.content.get_community_stats().await?;
    Ok(found(row))
}

/// POST /roadmap
pub async fn create_roadmap_item(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let input: CreateRoadmapItem = parse_body(body)?;
    let row = state.content.create_roadmap_item(input).await?;
    Ok(created(row))
}

/// GET /roadmap
pub async fn get_roadmap_items(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = state.content.get_roadmap_items().await?;
    Ok(listed(rows))
}
