//! wordlens-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wordlens_api::ApiError;
use wordlens_api::api::AppState;
use wordlens_api::api::run_server;
use wordlens_api::config::Config;
use wordlens_api::service::WordAnalysisApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env is optional; real environment variables win
  let dotenv_loaded = dotenvy::dotenv().is_ok();

  // Logging
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env()?;
  tracing::info!(
    dotenv_loaded,
    bind_addr = %config.bind_addr,
    model = %config.completion.model,
    max_tokens = config.completion.max_tokens,
    api_key_set = config.completion.api_key.is_some(),
    "configuration loaded"
  );
  if config.completion.api_key.is_none() {
    tracing::warn!("OPENAI_API_KEY is not set; every analysis request will fail");
  }

  let service = Arc::new(WordAnalysisApiServiceFull::new(&config)?);
  tracing::info!("word analysis service initialized");

  let state = AppState::new(config, service);

  run_server(state).await
}
