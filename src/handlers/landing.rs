//! Aggregated landing page read.

use crate::error::AppError;
use crate::response::found;
use crate::state::AppState;
use axum::extract::State;

/// GET /landing: every section in one payload; fails when hero or stats are missing.
pub async fn get_landing_page_data(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let data = state.content.get_landing_page_data().await?;
    Ok(found(data))
}
