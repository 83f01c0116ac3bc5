//! The recommendation form: prompt building, model call and reply formatting.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use minijinja::context;

use super::render_page;
use crate::app::AppContext;
use crate::app::auth::CurrentUser;
use crate::domain::{AppError, FormInput, build_prompt, format_reply};
use crate::ports::CompletionRequest;

const PROMPT_PAGE: &str = "prompt.html";
const UPSTREAM_FAILURE_MESSAGE: &str =
    "We could not get recommendations right now. Please try again in a moment.";

/// `GET /prompt`: the empty form.
pub async fn show_form(_user: CurrentUser, State(ctx): State<Arc<AppContext>>) -> Response {
    render_page(&ctx, StatusCode::OK, PROMPT_PAGE, context! { signed_in => true })
}

/// `POST /prompt`: run one submission and render the formatted reply.
pub async fn submit(
    user: CurrentUser,
    State(ctx): State<Arc<AppContext>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    match recommend(&ctx, &fields).await {
        Ok(formatted_reply) => render_page(
            &ctx,
            StatusCode::OK,
            PROMPT_PAGE,
            context! { signed_in => true, formatted_reply },
        ),
        Err(err) if err.is_input_error() => {
            tracing::info!(user_id = user.session.user_id, error = %err, "rejected form submission");
            render_page(
                &ctx,
                StatusCode::UNPROCESSABLE_ENTITY,
                PROMPT_PAGE,
                context! { signed_in => true, error => err.to_string(), fields },
            )
        }
        Err(err) => {
            tracing::error!(user_id = user.session.user_id, error = %err, "recommendation failed");
            let status = match err {
                AppError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            render_page(
                &ctx,
                status,
                "error.html",
                context! { signed_in => true, error => UPSTREAM_FAILURE_MESSAGE, back => "/prompt" },
            )
        }
    }
}

/// Form fields in, formatted HTML fragment out.
///
/// The model call runs on the blocking pool; it is the only point where
/// this future waits.
pub async fn recommend(
    ctx: &AppContext,
    fields: &HashMap<String, String>,
) -> Result<String, AppError> {
    let input = FormInput::from_fields(fields)?;
    let request = CompletionRequest::user_prompt(ctx.model(), build_prompt(&input));

    let client = ctx.completion();
    let reply = tokio::task::spawn_blocking(move || client.complete(request))
        .await
        .map_err(|e| AppError::upstream(format!("Completion worker failed: {}", e), None))??;

    tracing::debug!(reply_len = reply.len(), "received model reply");
    Ok(format_reply(&reply, ctx.escape_policy()))
}
