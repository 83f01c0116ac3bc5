mod fake_completion_client;

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use chrono::Utc;

use crate::adapters::argon2_credentials::hash_password;
use crate::adapters::{MemorySessionStore, MemoryUserStore, Views};
use crate::app::AppContext;
use crate::domain::AppConfig;

pub use fake_completion_client::FakeCompletionClient;

pub const TEST_EMAIL: &str = "yogi@example.com";
pub const TEST_PASSWORD: &str = "Lotus#Pose9";

/// Context wired to in-memory stores and the given completion client.
pub fn test_context(client: FakeCompletionClient) -> Arc<AppContext> {
    test_context_with(&AppConfig::default(), client)
}

pub fn test_context_with(config: &AppConfig, client: FakeCompletionClient) -> Arc<AppContext> {
    Arc::new(AppContext::new(
        config,
        Arc::new(client),
        Arc::new(MemoryUserStore::new()),
        Arc::new(MemorySessionStore::new(config.session.lifetime())),
        Views::new().unwrap(),
    ))
}

/// Register the test account and return a `Cookie` header value for a live session.
pub fn signed_in_cookie(ctx: &AppContext) -> String {
    let user = match ctx.users().find_by_email(TEST_EMAIL) {
        Some(user) => user,
        None => ctx.users().insert(TEST_EMAIL, hash_password(TEST_PASSWORD).unwrap()).unwrap(),
    };
    let session = ctx.sessions().create(user.id, Utc::now());
    format!("session={}", session.token)
}

fn form_body(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish()
}

pub fn post_form(uri: &str, cookie: Option<&str>, pairs: &[(&str, &str)]) -> Request<Body> {
    let mut builder =
        Request::post(uri).header("content-type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::from(form_body(pairs))).unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn valid_form_pairs() -> [(&'static str, &'static str); 6] {
    [
        ("weight", "72.5"),
        ("height_feet", "5"),
        ("height_inches", "9"),
        ("age", "34"),
        ("gender", "female"),
        ("health_issue", "lower back pain"),
    ]
}

pub fn complete_form() -> HashMap<String, String> {
    valid_form_pairs().iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
