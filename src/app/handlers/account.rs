//! Signup, login and logout.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use minijinja::context;

use super::render_page;
use crate::adapters::argon2_credentials::{hash_password, verify_password, verify_unknown_account};
use crate::app::AppContext;
use crate::app::auth::{CurrentUser, LOGIN_PATH, expired_session_cookie, session_cookie};
use crate::domain::{AppError, validate_password};
use crate::ports::User;

const SIGNUP_PAGE: &str = "signup.html";
const LOGIN_PAGE: &str = "login.html";
const ACCOUNT_CREATED: &str = "Account created successfully!";

type Fields = HashMap<String, String>;

/// `GET /signup`
pub async fn signup_form(State(ctx): State<Arc<AppContext>>) -> Response {
    render_page(&ctx, StatusCode::OK, SIGNUP_PAGE, context! {})
}

/// `POST /signup`
pub async fn signup(State(ctx): State<Arc<AppContext>>, Form(fields): Form<Fields>) -> Response {
    let email = fields.get("email").map(|e| e.trim().to_string()).unwrap_or_default();

    let worker_ctx = Arc::clone(&ctx);
    match on_blocking_pool(move || register(&worker_ctx, &fields)).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "account created");
            Redirect::to(&format!("{}?created=1", LOGIN_PATH)).into_response()
        }
        Err(err) if err.is_input_error() => render_page(
            &ctx,
            StatusCode::UNPROCESSABLE_ENTITY,
            SIGNUP_PAGE,
            context! { email, error => err.to_string() },
        ),
        Err(err) => internal_error(&ctx, err, "/signup"),
    }
}

fn register(ctx: &AppContext, fields: &Fields) -> Result<User, AppError> {
    let email = required(fields, "email")?;
    let password = fields.get("password").map(String::as_str).unwrap_or_default();

    validate_password(password)?;
    if ctx.users().find_by_email(email).is_some() {
        return Err(AppError::EmailTaken);
    }

    let password_hash = hash_password(password)?;
    ctx.users().insert(email, password_hash)
}

/// `GET /login`
pub async fn login_form(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let notice = query.contains_key("created").then_some(ACCOUNT_CREATED);
    render_page(&ctx, StatusCode::OK, LOGIN_PAGE, context! { notice })
}

/// `POST /login`
pub async fn login(State(ctx): State<Arc<AppContext>>, Form(fields): Form<Fields>) -> Response {
    let email = fields.get("email").map(|e| e.trim().to_string()).unwrap_or_default();

    let worker_ctx = Arc::clone(&ctx);
    match on_blocking_pool(move || authenticate(&worker_ctx, &fields)).await {
        Ok(user) => {
            let session = ctx.sessions().create(user.id, Utc::now());
            tracing::info!(user_id = user.id, "signed in");
            ([(SET_COOKIE, session_cookie(&session, &ctx))], Redirect::to("/")).into_response()
        }
        Err(err) if err.is_input_error() => {
            tracing::info!(error = %err, "sign-in rejected");
            render_page(
                &ctx,
                StatusCode::UNAUTHORIZED,
                LOGIN_PAGE,
                context! { email, error => AppError::InvalidCredentials.to_string() },
            )
        }
        Err(err) => internal_error(&ctx, err, LOGIN_PATH),
    }
}

fn authenticate(ctx: &AppContext, fields: &Fields) -> Result<User, AppError> {
    let email = required(fields, "email")?;
    let password = fields.get("password").map(String::as_str).unwrap_or_default();

    let Some(user) = ctx.users().find_by_email(email) else {
        verify_unknown_account(password);
        return Err(AppError::InvalidCredentials);
    };
    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }
    Ok(user)
}

/// `GET /logout`
pub async fn logout(user: CurrentUser, State(ctx): State<Arc<AppContext>>) -> Response {
    ctx.sessions().remove(&user.session.token);
    tracing::info!(user_id = user.session.user_id, "signed out");
    ([(SET_COOKIE, expired_session_cookie())], Redirect::to("/")).into_response()
}

/// Argon2 work is CPU-bound; keep it off the async workers.
async fn on_blocking_pool<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::PasswordHash(format!("Credential worker failed: {}", e)))?
}

fn required<'a>(fields: &'a Fields, field: &'static str) -> Result<&'a str, AppError> {
    match fields.get(field).map(|value| value.trim()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::MissingField { field }),
    }
}

fn internal_error(ctx: &AppContext, err: AppError, back: &str) -> Response {
    tracing::error!(error = %err, "account request failed");
    render_page(
        ctx,
        StatusCode::INTERNAL_SERVER_ERROR,
        "error.html",
        context! { error => "Something went wrong. Please try again.", back },
    )
}
