use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use riskometer::RiskReport;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RiskometerParams {
    /// Restrict the analysis to the last N years of data. 0 means all data.
    pub years: Option<u32>,
}

/// GET /api/riskometer/:index_name?years=10
///
/// Trailing 3-year returns, risk scores and summary statistics for one
/// index. An index without enough history returns an empty `data` array
/// with zeroed statistics.
pub async fn get_riskometer(
    State(state): State<Arc<AppState>>,
    Path(index_name): Path<String>,
    Query(params): Query<RiskometerParams>,
) -> Result<Json<RiskReport>, AppError> {
    let report = state
        .riskometer
        .compute(&index_name, params.years)
        .await?;
    Ok(Json(report))
}
