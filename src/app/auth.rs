//! Session cookie handling and the sign-in gate.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::response::Redirect;
use chrono::Utc;

use crate::app::AppContext;
use crate::ports::Session;

pub const SESSION_COOKIE: &str = "session";
pub const LOGIN_PATH: &str = "/login";

/// Session token carried by the request's `Cookie` headers, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Live session for the request, if the browser presented one.
pub fn current_session(ctx: &AppContext, headers: &HeaderMap) -> Option<Session> {
    let token = session_token(headers)?;
    ctx.sessions().lookup(&token, Utc::now())
}

/// `Set-Cookie` value that starts a session.
pub fn session_cookie(session: &Session, ctx: &AppContext) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        SESSION_COOKIE,
        session.token,
        ctx.session_lifetime().num_seconds()
    )
}

/// `Set-Cookie` value that clears the session cookie.
pub fn expired_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0", SESSION_COOKIE)
}

/// Extractor for routes that require a signed-in user.
///
/// Requests without a live session are redirected to the login page before
/// the handler body (or any body extractor) runs.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session: Session,
}

#[async_trait]
impl FromRequestParts<Arc<AppContext>> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        match current_session(ctx, &parts.headers) {
            Some(session) => Ok(CurrentUser { session }),
            None => {
                tracing::debug!(path = %parts.uri.path(), "unauthenticated request redirected");
                Err(Redirect::to(LOGIN_PATH))
            }
        }
    }
}
