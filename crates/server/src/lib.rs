//! textbrief HTTP server
//!
//! Actix-web boundary in front of the hierarchical summarizer

mod error;
mod routes;
mod state;
mod types;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use textbrief_common::{AppConfig, Result};
use textbrief_llm::build_summarizer;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use routes::{configure, form_config};
pub use state::AppState;

/// Build the summarizer once, then serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let summarizer = Arc::new(build_summarizer(&config)?);

    match summarizer.health_check().await {
        Ok(true) => info!("Summary model reachable: {}", summarizer.model_name()),
        Ok(false) => warn!("Summary model {} answered with an error status", summarizer.model_name()),
        Err(e) => warn!("Summary model {} unreachable at startup: {}", summarizer.model_name(), e),
    }

    let bind_addr = config.server_bind_address();
    let form_limit = config.max_form_bytes;
    let state = web::Data::new(Arc::new(AppState::new(config, summarizer)));

    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(form_config(form_limit))
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
