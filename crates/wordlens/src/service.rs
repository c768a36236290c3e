//! Word analysis service

use std::sync::Arc;

use tracing::{debug, info};

use crate::completion::{CompletionClient, CompletionRequest, OpenAiCompletionClient};
use crate::config::CompletionConfig;
use crate::errors::{WordLensError, WordLensResult};
use crate::extractor::extract;
use crate::models::WordAnalysis;
use crate::prompt::build_prompt;

/// Checks a caller-supplied word and returns it trimmed.
///
/// # Errors
/// `WordLensError::InvalidInput` if the word is empty or only whitespace.
pub fn validate_word(word: &str) -> WordLensResult<&str> {
  let trimmed = word.trim();
  if trimmed.is_empty() {
    return Err(WordLensError::invalid_input("word is empty"));
  }
  Ok(trimmed)
}

/// Validate → prompt → complete → extract.
///
/// Holds no per-request state; one instance serves all requests concurrently.
#[derive(Clone)]
pub struct WordAnalyzer {
  client: Arc<dyn CompletionClient>,
  max_tokens: u32,
}

impl WordAnalyzer {
  /// Creates an analyzer around any completion client.
  ///
  /// # Arguments
  /// * `client` - Completion service (production client or a test stub)
  /// * `max_tokens` - Output length hint passed with every request
  #[must_use]
  pub fn new(client: Arc<dyn CompletionClient>, max_tokens: u32) -> Self {
    Self { client, max_tokens }
  }

  /// Creates an analyzer backed by [`OpenAiCompletionClient`].
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be built.
  pub fn from_config(config: &CompletionConfig) -> WordLensResult<Self> {
    let client = OpenAiCompletionClient::new(config)?;
    Ok(Self::new(Arc::new(client), config.max_tokens))
  }

  /// Returns the output length hint sent with each request.
  pub fn max_tokens(&self) -> u32 {
    self.max_tokens
  }

  /// Analyzes one word.
  ///
  /// The completion client is only called for a valid word. Missing sections
  /// in the reply are not errors; they come back as sentinel values.
  ///
  /// # Errors
  /// - `InvalidInput` if the word is blank
  /// - `Completion` if the completion service cannot be reached or understood
  pub async fn analyze(&self, word: &str) -> WordLensResult<WordAnalysis> {
    let word = validate_word(word)?;

    let request = CompletionRequest {
      prompt: build_prompt(word),
      max_tokens: self.max_tokens,
    };

    let content = self.client.complete(&request).await?;
    debug!(word, content_len = content.len(), "completion received");

    let analysis = extract(&content);
    info!(
      word,
      guide_lines = analysis.pronunciation_guide.len(),
      "word analysis finished"
    );

    Ok(analysis)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use async_trait::async_trait;

  use super::*;
  use crate::errors::CompletionError;
  use crate::extractor::MEANING_NOT_FOUND;

  /// Records every request and answers with a fixed result
  struct RecordingClient {
    reply: Result<String, CompletionError>,
    seen: Mutex<Vec<CompletionRequest>>,
  }

  impl RecordingClient {
    fn replying(reply: Result<String, CompletionError>) -> Arc<Self> {
      Arc::new(Self {
        reply,
        seen: Mutex::new(Vec::new()),
      })
    }

    fn seen(&self) -> Vec<CompletionRequest> {
      self.seen.lock().unwrap().clone()
    }
  }

  #[async_trait]
  impl CompletionClient for RecordingClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
      self.seen.lock().unwrap().push(request.clone());
      self.reply.clone()
    }
  }

  #[test]
  fn validate_word_trims() {
    assert_eq!(validate_word("  apple \n").unwrap(), "apple");
  }

  #[test]
  fn validate_word_rejects_blank() {
    for word in ["", " ", "\t\n  "] {
      assert!(matches!(
        validate_word(word),
        Err(WordLensError::InvalidInput { .. })
      ));
    }
  }

  #[tokio::test]
  async fn analyze_sends_prompt_with_trimmed_word() {
    let client = RecordingClient::replying(Ok("뜻: 사과".to_string()));
    let analyzer = WordAnalyzer::new(client.clone(), 250);

    let analysis = analyzer.analyze("  apple  ").await.unwrap();
    assert_eq!(analysis.meaning, "사과");

    let seen = client.seen();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].prompt.contains("'apple'"));
    assert_eq!(seen[0].max_tokens, 250);
  }

  #[tokio::test]
  async fn blank_word_never_reaches_client() {
    let client = RecordingClient::replying(Ok(String::new()));
    let analyzer = WordAnalyzer::new(client.clone(), 250);

    let err = analyzer.analyze("   ").await.unwrap_err();
    assert!(matches!(err, WordLensError::InvalidInput { .. }));
    assert!(client.seen().is_empty());
  }

  #[tokio::test]
  async fn client_failure_is_a_completion_error() {
    let client = RecordingClient::replying(Err(CompletionError::MissingApiKey));
    let analyzer = WordAnalyzer::new(client, 250);

    let err = analyzer.analyze("apple").await.unwrap_err();
    assert!(matches!(
      err,
      WordLensError::Completion(CompletionError::MissingApiKey)
    ));
  }

  #[tokio::test]
  async fn empty_completion_is_not_an_error() {
    let client = RecordingClient::replying(Ok(String::new()));
    let analyzer = WordAnalyzer::new(client, 250);

    let analysis = analyzer.analyze("apple").await.unwrap();
    assert_eq!(analysis.meaning, MEANING_NOT_FOUND);
    assert!(analysis.pronunciation_guide.is_empty());
  }

  #[test]
  fn from_config_uses_configured_max_tokens() {
    let config = CompletionConfig {
      max_tokens: 120,
      ..CompletionConfig::default()
    };
    let analyzer = WordAnalyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.max_tokens(), 120);
  }
}
