mod config;
mod errors;
mod feedback;
mod generation;
mod llm_client;
mod matching;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feedback::FeedbackStore;
use crate::llm_client::CohereClient;
use crate::matching::enhance::{LlmScoreEnhancer, ScoreEnhancer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumake API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the optional score enhancer; without a key the keyword
    // scorer carries all scoring on its own.
    let enhancer: Option<Arc<dyn ScoreEnhancer>> = match &config.cohere_api_key {
        Some(key) => {
            info!("Score enhancement enabled (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmScoreEnhancer(CohereClient::new(key.clone()))))
        }
        None => {
            info!("COHERE_API_KEY not set, score enhancement disabled");
            None
        }
    };

    let feedback = Arc::new(FeedbackStore::new(config.feedback_dir.clone()));
    info!("Feedback store at {}", config.feedback_dir.display());

    let state = AppState {
        config: config.clone(),
        enhancer,
        feedback,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
