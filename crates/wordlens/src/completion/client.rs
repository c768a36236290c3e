//! Completion client trait

use async_trait::async_trait;

use crate::errors::CompletionError;

/// One prompt sent to the completion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
  /// Full prompt text, sent as a single user message
  pub prompt: String,
  /// Maximum output length hint
  pub max_tokens: u32,
}

/// Common interface for completion services
///
/// Given a prompt, returns the generated text or fails. Implementations decide
/// transport, authentication and envelope format.
#[async_trait]
pub trait CompletionClient: Send + Sync {
  /// Sends `request` and returns the text of the first candidate.
  ///
  /// An envelope without candidates yields an empty string, not an error.
  ///
  /// # Errors
  /// Any failure reaching or interpreting the service.
  async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
