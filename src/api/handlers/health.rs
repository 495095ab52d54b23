//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Entry store is readable
/// - **503 Service Unavailable**: Entry store cannot be listed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": {
///       "status": "ok",
///       "message": "3 entries"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = check_storage(&state).await;

    let healthy = storage_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the entry store can be listed.
async fn check_storage(state: &AppState) -> CheckStatus {
    match state.entry_service.list_titles().await {
        Ok(titles) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} entries", titles.len())),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed to list entries");
            CheckStatus {
                status: "error".to_string(),
                message: Some("Entry store unavailable".to_string()),
            }
        }
    }
}
