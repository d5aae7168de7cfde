pub mod calls;
pub mod health;
pub mod manager;

use axum::extract::{rejection::QueryRejection, Query};
use axum::http::Uri;
use axum::Router;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// `?pass=` accepted by manager endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PassQuery {
    pub pass: Option<String>,
}

impl PassQuery {
    /// A query that does not parse (e.g. `?pass=a&pass=b`) carries no pass;
    /// the guard alone decides.
    pub fn lenient(query: Result<Query<PassQuery>, QueryRejection>) -> Self {
        query.map(|Query(q)| q).unwrap_or_default()
    }
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(manager::manager_routes())
        .fallback(not_found)
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::health_routes())
        .merge(calls::call_routes())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
