use std::path::PathBuf;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Async riskometer. Dispatches the blocking CSV load and computation to
    /// a thread pool internally.
    pub riskometer: riskometer::AsyncRiskometer,

    /// Frontend page served at `/`. Read from disk on every request.
    pub index_html: PathBuf,
}
