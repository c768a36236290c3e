//! Error definitions

use std::sync::Arc;
use thiserror::Error;

/// Errors in the completion settings (`CompletionConfig`)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// model is empty
  #[error("model must not be empty")]
  EmptyModel,

  /// max_tokens < 1
  #[error("max_tokens must be at least 1: actual={actual}")]
  InvalidMaxTokens {
    /// Value that was given
    actual: u32,
  },

  /// api_base_url is not an http(s) URL
  #[error("api_base_url must start with http:// or https://: actual={actual}")]
  InvalidBaseUrl {
    /// Value that was given
    actual: String,
  },

  /// timeout is zero
  #[error("timeout must be greater than zero")]
  InvalidTimeout,
}

/// Errors reaching or interpreting the completion service
///
/// Every variant ends up as the same generic 500 for callers; the detail is
/// only meant for logs.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CompletionError {
  /// No API key was configured
  #[error("completion API key is not configured")]
  MissingApiKey,

  /// The HTTP client could not be built
  #[error("failed to build HTTP client: {0}")]
  ClientBuild(Arc<reqwest::Error>),

  /// Transport failure (connect, TLS, timeout, ...)
  #[error("completion request failed: {0}")]
  Request(Arc<reqwest::Error>),

  /// The service answered with a non-success status
  #[error("completion service returned {status}: {body}")]
  Status {
    /// HTTP status code
    status: u16,
    /// Response body, as far as it could be read
    body: String,
  },

  /// The response envelope could not be decoded
  #[error("failed to decode completion response: {0}")]
  Decode(Arc<reqwest::Error>),
}

/// Unified error
///
/// Public APIs of this crate return this error via `WordLensResult<T>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WordLensError {
  /// The caller's input is unusable
  #[error("invalid input: {reason}")]
  InvalidInput {
    /// Why the input was rejected
    reason: String,
  },

  /// Completion service errors
  #[error(transparent)]
  Completion(#[from] CompletionError),

  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl WordLensError {
  /// Creates an `InvalidInput` error
  #[must_use]
  pub fn invalid_input(reason: impl Into<String>) -> Self {
    Self::InvalidInput {
      reason: reason.into(),
    }
  }
}

/// Standard Result alias of the wordlens crate
pub type WordLensResult<T> = Result<T, WordLensError>;
