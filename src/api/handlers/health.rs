//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::collections::BTreeMap;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with record counts.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database query failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 12 records" },
///     "records": { "clients": 4, "medicines": 2, "pets": 3, "products": 1, "providers": 1, "vets": 1 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (database, records) = match state.record_counts().await {
        Ok(counts) => {
            let total: i64 = counts.iter().map(|(_, count)| count).sum();
            (
                CheckStatus {
                    status: "ok".to_string(),
                    message: Some(format!("Connected, {total} records")),
                },
                counts.into_iter().collect(),
            )
        }
        Err(e) => (
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("Database error: {}", e)),
            },
            BTreeMap::new(),
        ),
    };

    let healthy = database.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database, records },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
