//! yoga-advisor: body-metric form in, model-written yoga recommendations out.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use adapters::{HttpCompletionClient, MemorySessionStore, MemoryUserStore, Views};
use app::AppContext;

pub use domain::{AppConfig, AppError, EscapePolicy, FormInput, build_prompt, format_reply};

/// Options for the `serve` command.
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    /// Optional `config.toml` path.
    pub config: Option<PathBuf>,
    /// Overrides `[server] bind` from the configuration.
    pub bind: Option<SocketAddr>,
}

/// Run the web application until interrupted.
///
/// Reads the API key from `GROQ_API_KEY`.
pub fn serve(options: ServeOptions) -> Result<(), AppError> {
    app::logging::init()?;

    let mut config = app::config::load_config(options.config.as_deref())?;
    if let Some(bind) = options.bind {
        config.server.bind = bind;
    }

    let completion = HttpCompletionClient::from_env(&config.completion)?;
    let ctx = Arc::new(AppContext::new(
        &config,
        Arc::new(completion),
        Arc::new(MemoryUserStore::new()),
        Arc::new(MemorySessionStore::new(config.session.lifetime())),
        Views::new()?,
    ));

    tracing::info!(model = %config.completion.model, "starting yoga-advisor");
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(app::server::serve(config.server.bind, ctx))
}

/// Render the prompt that a form submission with `fields` would send.
///
/// Fields are validated exactly as the web form validates them.
pub fn preview_prompt(fields: &HashMap<String, String>) -> Result<String, AppError> {
    let input = FormInput::from_fields(fields)?;
    Ok(build_prompt(&input))
}
