//! HTTP server for the evaluation service.

use crate::config::Config;
use crate::llm::LlmClient;
use crate::report::ReportGenerator;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
///
/// The report generator (and the LLM client inside it) is built once
/// at startup and injected here; handlers only ever read it.
pub struct AppState {
    pub reporter: ReportGenerator,
}

impl AppState {
    pub fn new(reporter: ReportGenerator) -> Self {
        Self { reporter }
    }

    /// Build app state from configuration.
    pub fn from_config(config: &Config) -> Self {
        let client = LlmClient::new(config.llm.clone());
        Self::new(ReportGenerator::new(client))
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::analysis_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until it is shut down.
pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::from_config(config);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    info!("Listening on http://{}", config.server.bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
