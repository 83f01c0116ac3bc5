use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use minijinja::context;

use super::render_page;
use crate::app::AppContext;
use crate::app::auth::current_session;

/// Landing page.
pub async fn index(State(ctx): State<Arc<AppContext>>, headers: HeaderMap) -> Response {
    let signed_in = current_session(&ctx, &headers).is_some();
    render_page(&ctx, StatusCode::OK, "index.html", context! { signed_in })
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
