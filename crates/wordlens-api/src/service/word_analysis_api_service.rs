//! Word Analysis Service

use async_trait::async_trait;
use wordlens::WordAnalyzer;

use crate::config::Config;
use crate::errors::{ApiError, Result, WORD_MISSING_MESSAGE};
use crate::models::{WordAnalysisRequest, WordAnalysisResponse};

/// Common interface for the word analysis service
///
/// This trait allows swapping the production implementation
/// (`WordAnalysisApiServiceFull`) with test stubs.
#[async_trait]
pub trait WordAnalysisApiService: Send + Sync {
  /// Executes word analysis
  ///
  /// # Errors
  /// - Input error (missing or blank word)
  /// - Completion service error
  async fn analyze(&self, request: WordAnalysisRequest) -> Result<WordAnalysisResponse>;
}

/// Word Analysis Service backed by a [`WordAnalyzer`]
#[derive(Clone)]
pub struct WordAnalysisApiServiceFull {
  analyzer: WordAnalyzer,
}

impl WordAnalysisApiServiceFull {
  /// Initializes the service with the OpenAI-compatible completion client
  ///
  /// # Arguments
  /// * `config` - Configuration (including the API credential)
  ///
  /// # Errors
  /// Returns an error if the completion client cannot be created
  pub fn new(config: &Config) -> Result<Self> {
    let analyzer = WordAnalyzer::from_config(&config.completion)?;
    Ok(Self { analyzer })
  }

  /// Wraps an existing analyzer (e.g. one built around a stub client)
  #[must_use]
  pub fn with_analyzer(analyzer: WordAnalyzer) -> Self {
    Self { analyzer }
  }

  /// Executes word analysis
  ///
  /// # Errors
  /// - If the word is missing or blank (the completion service is not called)
  /// - If the completion service fails
  pub async fn analyze(&self, request: WordAnalysisRequest) -> Result<WordAnalysisResponse> {
    let word = request.word.ok_or_else(|| ApiError::invalid_input(WORD_MISSING_MESSAGE))?;

    let analysis = self.analyzer.analyze(&word).await?;

    Ok(analysis.into())
  }
}

/// Production implementation of trait `WordAnalysisApiService`
#[async_trait]
impl WordAnalysisApiService for WordAnalysisApiServiceFull {
  async fn analyze(&self, request: WordAnalysisRequest) -> Result<WordAnalysisResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    WordAnalysisApiServiceFull::analyze(self, request).await
  }
}
