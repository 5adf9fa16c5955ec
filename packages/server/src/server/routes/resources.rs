use axum::{extract::Extension, Json};

use crate::domains::triage::models::{AnalyzedMessage, Resource};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Full resource list (read-only snapshot)
pub async fn list_resources_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let resources = state.deps.store.list_resources().await?;
    Ok(Json(resources))
}

/// Every analyzed message since startup, oldest first
pub async fn list_results_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<AnalyzedMessage>>, ApiError> {
    let results = state.deps.store.list_results().await?;
    Ok(Json(results))
}
