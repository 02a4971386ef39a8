use crate::handlers::save_user_handler;
use crate::observability::{health_handler, metrics_handler, AppMetrics};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn create_router(metrics: Arc<AppMetrics>) -> Router {
    Router::new()
        .route("/saveuser", post(save_user_handler))
        .route("/health", get(health_handler))
        .route("/healthz", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}
