pub mod api;
pub mod config;
pub mod models;
pub mod pipeline;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{start_server, ApiContext, ServerError};
use crate::config::{AppConfig, ConfigError, NARRATIVE_TIMEOUT_SECS};
use crate::pipeline::narrative::{NarrativeError, NarrativeSummarizer, OllamaNarrativeSummarizer};

pub use crate::models::MedicalSummary;
pub use crate::pipeline::extraction::summarize_report;
pub use crate::pipeline::formatter::format_summary;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Narrative summarizer setup failed: {0}")]
    Narrative(#[from] NarrativeError),

    #[error("Runtime error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Start the API server and block until Ctrl-C.
pub fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env()?;
    let bind_addr = config.bind_addr;

    // The blocking HTTP client must be created and dropped outside the
    // async runtime, so this handle outlives it.
    let narrative: Option<Arc<dyn NarrativeSummarizer>> = match &config.narrative {
        Some(n) => {
            tracing::info!(base_url = %n.base_url, model = %n.model, "Narrative summaries enabled");
            Some(Arc::new(OllamaNarrativeSummarizer::new(
                &n.base_url,
                &n.model,
                NARRATIVE_TIMEOUT_SECS,
            )?))
        }
        None => {
            tracing::info!("Narrative summaries disabled (MEDSUM_OLLAMA_URL not set)");
            None
        }
    };

    let ctx = ApiContext::new(config, narrative.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async move {
        let mut server = start_server(ctx, bind_addr).await?;
        tracing::info!(addr = %server.session.server_addr, "Listening");

        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {e}");
        }

        server.shutdown();
        server.stopped().await;
        Ok::<(), StartupError>(())
    });

    drop(runtime);
    drop(narrative);

    tracing::info!("{} stopped", config::APP_NAME);
    result
}
