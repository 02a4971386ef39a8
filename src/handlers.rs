use crate::observability::AppMetrics;
use crate::types::Envelope;
use axum::{body::Bytes, extract::State, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Save-user endpoint handler.
///
/// Parses the raw body itself rather than going through the `Json` extractor:
/// a malformed body must come back as a business-status-500 envelope on a
/// transport-200 response, not as the extractor's 4xx rejection. Callers
/// detect failure by inspecting the envelope's `Status` field.
#[utoipa::path(
    post,
    path = "/saveuser",
    request_body(content = Value, description = "Arbitrary JSON user payload"),
    responses(
        (status = 200, description = "Envelope echoing the payload on success, or carrying a business-level failure", body = Envelope)
    ),
    tag = "Users"
)]
pub async fn save_user_handler(
    State(metrics): State<Arc<AppMetrics>>,
    body: Bytes,
) -> Json<Envelope> {
    metrics.increment_requests().await;

    match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => {
            metrics.increment_success().await;
            metrics.increment_users_saved().await;
            info!("saved user payload ({} bytes)", body.len());
            Json(Envelope::success(payload))
        }
        Err(e) => {
            metrics.increment_failure().await;
            error!("failed to parse user payload: {}", e);
            Json(Envelope::failure(e.to_string()))
        }
    }
}
