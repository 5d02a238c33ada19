use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::state::AppState;

/// GET /
///
/// Serve the frontend page.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let html = tokio::fs::read_to_string(&state.index_html)
        .await
        .map_err(|e| AppError::internal(format!("Error loading HTML: {e}")))?;
    Ok(Html(html))
}
