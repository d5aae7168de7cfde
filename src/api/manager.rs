use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::api::PassQuery;
use crate::auth::{header_pass, query_pass};
use crate::state::AppState;

const MANAGER_PAGE: &str = include_str!("manager.html");
const PASS_PLACEHOLDER: &str = "__MANAGER_PASS__";

const UNAUTHORIZED_PAGE: &str =
    "<h3>Unauthorized</h3><p>Add ?pass=YOUR_PASS to the URL or send an X-Manager-Pass header.</p>";

const USAGE: &str = "OK - use /manager?pass=YOUR_PASS or POST /api/create-call";

pub fn manager_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(usage))
        .route("/manager", get(manager_page))
}

/// GET / - plain-text usage hint
async fn usage() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], USAGE)
}

/// GET /manager - call creation form, gated by the manager pass
async fn manager_page(
    State(state): State<AppState>,
    query: std::result::Result<Query<PassQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let query = PassQuery::lenient(query);
    let presented = query_pass(query.pass.as_ref()).or_else(|| header_pass(&headers));
    if !state.guard.is_authorized(presented) {
        tracing::warn!("Rejected manager page request with bad manager pass");
        return (StatusCode::UNAUTHORIZED, Html(UNAUTHORIZED_PAGE)).into_response();
    }

    Html(render_manager_page(&state.config.manager_pass)).into_response()
}

/// Inline the pass as a JS string literal the form sends back in `X-Manager-Pass`.
fn render_manager_page(manager_pass: &str) -> String {
    let literal = serde_json::Value::String(manager_pass.to_string())
        .to_string()
        .replace("</", "<\\/");

    MANAGER_PAGE.replace(PASS_PLACEHOLDER, &literal)
}
