use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::HeaderMap,
    routing::post,
    Json, Router,
};

use crate::api::PassQuery;
use crate::auth::{header_pass, query_pass};
use crate::error::Result;
use crate::links::LinkBuilder;
use crate::models::{CreateCallRequest, CreateCallResponse, RoomRequest};
use crate::state::AppState;

pub fn call_routes() -> Router<AppState> {
    Router::new().route("/create-call", post(create_call))
}

/// POST /api/create-call - provision a room and return per-role join links.
///
/// Checks run in order: manager pass, body, provider configuration. Nothing
/// reaches the provider unless all three pass.
async fn create_call(
    State(state): State<AppState>,
    query: std::result::Result<Query<PassQuery>, QueryRejection>,
    headers: HeaderMap,
    body: std::result::Result<Json<CreateCallRequest>, JsonRejection>,
) -> Result<Json<CreateCallResponse>> {
    let query = PassQuery::lenient(query);
    let presented = header_pass(&headers).or_else(|| query_pass(query.pass.as_ref()));
    if let Err(e) = state.guard.authorize(presented) {
        tracing::warn!("Rejected create-call with bad manager pass");
        return Err(e);
    }

    let Json(request) = body?;
    let duration = request.duration()?;

    let domain = match state.config.require_provider() {
        Ok(domain) => domain,
        Err(e) => {
            tracing::error!(error = %e, "Cannot create call");
            return Err(e);
        }
    };

    let room = state
        .provisioner
        .provision(RoomRequest {
            duration_minutes: duration.minutes(),
            privacy: state.config.room_privacy,
            name: None,
        })
        .await?;

    let links = LinkBuilder::new(
        domain,
        state.config.manager_pass.as_str(),
        state.config.manager_link_mode,
    )
    .build(&room.name, request.model_name(), request.client_name());

    tracing::info!(
        room = %room.name,
        duration_minutes = duration.minutes(),
        "Call created"
    );

    Ok(Json(CreateCallResponse {
        ok: true,
        room_name: room.name,
        exp: room.expires_at,
        links,
    }))
}
