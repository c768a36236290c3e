//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::WordAnalysisApiService;

/// Application State
///
/// Read-only state shared across the entire server.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Word Analysis Service
  ///
  /// - Production: `Arc::new(WordAnalysisApiServiceFull::new(&config)?)`
  /// - Test: a stub implementation or a service around a stub completion client
  pub service: Arc<dyn WordAnalysisApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn WordAnalysisApiService>) -> Self {
    Self { config, service }
  }
}
