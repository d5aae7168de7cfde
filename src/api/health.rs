use axum::{routing::get, Json, Router};
use chrono::Utc;

use crate::models::PingResponse;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}

/// GET /api/ping - liveness with server clock in epoch millis
async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        ok: true,
        ts: Utc::now().timestamp_millis(),
    })
}
