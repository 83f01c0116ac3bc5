//! Request handlers. Every handler answers with an HTML page or a redirect;
//! errors are turned into pages here and never escape to the server.

pub mod account;
pub mod pages;
pub mod prompt;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::Value;

use crate::app::AppContext;

/// Render `template` with `status`, or a plain 500 if rendering fails.
pub(crate) fn render_page(
    ctx: &AppContext,
    status: StatusCode,
    template: &str,
    page_ctx: Value,
) -> Response {
    match ctx.views().render(template, page_ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "page rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
