use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/indices
///
/// List every index (series column) available in the data file.
pub async fn list_indices(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let indices = state.riskometer.list_series().await?;
    Ok(Json(json!({ "indices": indices })))
}
