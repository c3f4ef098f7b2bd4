//! # server
//!
//! REST API serving California housing price predictions from a
//! pre-trained Random Forest model.
//!
//! Every call into the model runs on a bounded [`InferencePool`] so the
//! request dispatch threads never block on inference.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod error;
pub mod extract;
pub mod pool;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use pool::InferencePool;
pub use state::AppState;

/// Build the application router with middleware
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/model-info", get(routes::model_info))
        .route("/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Startup hook: touch the model once so the first request pays no
/// initialization cost. A failure here must abort startup.
pub async fn warm_up(state: &AppState) -> model_facade::Result<()> {
    let info = state.feature_info().await?;
    info!(
        n_features = info.n_features,
        features = ?info.feature_names,
        inference_workers = state.pool().size(),
        "Model warmed up"
    );
    Ok(())
}
