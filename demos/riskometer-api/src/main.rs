use std::sync::Arc;

use riskometer_api::config::ServerConfig;
use riskometer_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("PORT must be a valid port number");

    let mut builder = riskometer::AsyncRiskometer::builder();
    if let Some(path) = &config.data_file {
        builder = builder.data_file(path);
    }
    let riskometer = builder
        .build()
        .await
        .expect("Failed to initialize riskometer");

    let state = Arc::new(AppState {
        riskometer,
        index_html: config.index_html.clone(),
    });
    let app = riskometer_api::router(state);

    let addr = config.addr();
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
