//! HTTP server setup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::app::AppContext;
use crate::app::handlers::{account, pages, prompt};
use crate::domain::AppError;

/// Build the application router over a shared context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(pages::health))
        .route("/prompt", get(prompt::show_form).post(prompt::submit))
        .route("/signup", get(account::signup_form).post(account::signup))
        .route("/login", get(account::login_form).post(account::login))
        .route("/logout", get(account::logout))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Serve until the process receives Ctrl-C.
pub async fn serve(bind: SocketAddr, ctx: Arc<AppContext>) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("yoga-advisor listening on {}", listener.local_addr()?);

    axum::serve(listener, router(ctx)).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
