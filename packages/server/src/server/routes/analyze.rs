use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domains::triage::analyze_batch;
use crate::domains::triage::models::AnalyzedMessage;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct BulkAnalyzeRequest {
    pub messages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkAnalyzeResponse {
    pub results: Vec<AnalyzedMessage>,
}

/// Triage a batch of raw messages
///
/// Returns the analyzed messages sorted by urgency score, highest first.
/// A body that isn't `{"messages": [string]}` is rejected before any message
/// is processed.
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<BulkAnalyzeRequest>, JsonRejection>,
) -> Result<Json<BulkAnalyzeResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidInput(e.body_text()))?;

    let results = analyze_batch(&request.messages, &state.deps).await?;

    Ok(Json(BulkAnalyzeResponse { results }))
}
