// crates/wordlens/src/config.rs

use std::fmt;
use std::time::Duration;

use crate::errors::ConfigError;

/// Base URL of the OpenAI API (without the `/chat/completions` suffix)
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Model requested when nothing else is configured
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Upper bound on generated tokens.
///
/// Enough for the four sections of the prompt template, short enough to keep
/// answers compact.
pub const DEFAULT_MAX_TOKENS: u32 = 250;

/// Outbound request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the completion service.
///
/// Loaded once at startup and handed to [`crate::OpenAiCompletionClient::new`].
#[derive(Clone, PartialEq, Eq)]
pub struct CompletionConfig {
  /// Base URL, e.g. "https://api.openai.com/v1"
  pub api_base_url: String,
  /// Bearer credential. `None` surfaces as `CompletionError::MissingApiKey` on first use.
  pub api_key: Option<String>,
  /// Model identifier, e.g. "gpt-4"
  pub model: String,
  /// Maximum output length hint sent as `max_tokens`
  pub max_tokens: u32,
  /// Timeout for one outbound request
  pub timeout: Duration,
}

impl Default for CompletionConfig {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      api_key: None,
      model: DEFAULT_MODEL.to_string(),
      max_tokens: DEFAULT_MAX_TOKENS,
      timeout: DEFAULT_TIMEOUT,
    }
  }
}

// The key must never reach the logs.
impl fmt::Debug for CompletionConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CompletionConfig")
      .field("api_base_url", &self.api_base_url)
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("model", &self.model)
      .field("max_tokens", &self.max_tokens)
      .field("timeout", &self.timeout)
      .finish()
  }
}

impl CompletionConfig {
  /// Returns the full chat-completions endpoint.
  ///
  /// # Examples
  /// - `"https://api.openai.com/v1"` → `"https://api.openai.com/v1/chat/completions"`
  /// - `"http://127.0.0.1:8080/v1/"` → `"http://127.0.0.1:8080/v1/chat/completions"`
  pub fn chat_completions_url(&self) -> String {
    format!("{}/chat/completions", self.api_base_url.trim_end_matches('/'))
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `model` is not blank
  /// - `max_tokens` >= 1
  /// - `api_base_url` starts with `http://` or `https://`
  /// - `timeout` > 0
  ///
  /// The API key is deliberately not checked here; a missing key is reported
  /// per request.
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.model.trim().is_empty() {
      return Err(ConfigError::EmptyModel);
    }

    if self.max_tokens < 1 {
      return Err(ConfigError::InvalidMaxTokens {
        actual: self.max_tokens,
      });
    }

    if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
      return Err(ConfigError::InvalidBaseUrl {
        actual: self.api_base_url.clone(),
      });
    }

    if self.timeout.is_zero() {
      return Err(ConfigError::InvalidTimeout);
    }

    Ok(())
  }
}
