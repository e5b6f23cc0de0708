mod handlers;
mod state;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::classifier::Classifier;
use crate::error::Result;

pub fn build_router(classifier: Classifier) -> Router {
    let state = Arc::new(AppState { classifier });

    Router::new()
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/classify", post(handlers::classify))
        .route("/api/regions", get(handlers::regions))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, classifier: Classifier) -> Result<()> {
    let app = build_router(classifier);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "roster atlas server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
