//! OpenAI-compatible chat-completions client

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::client::{CompletionClient, CompletionRequest};
use crate::config::CompletionConfig;
use crate::errors::CompletionError;

/// Chat-completions client over HTTPS with a bearer credential.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct OpenAiCompletionClient {
  http: HttpClient,
  endpoint: String,
  model: String,
  api_key: Option<String>,
}

// Same redaction as `CompletionConfig`; the key must never reach the logs.
impl fmt::Debug for OpenAiCompletionClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OpenAiCompletionClient")
      .field("endpoint", &self.endpoint)
      .field("model", &self.model)
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .finish_non_exhaustive()
  }
}

impl OpenAiCompletionClient {
  /// Creates a client from validated settings.
  ///
  /// # Errors
  /// - `ConfigError` if `config` is invalid (wrapped in `WordLensError`)
  /// - `CompletionError::ClientBuild` if the HTTP client cannot be built
  pub fn new(config: &CompletionConfig) -> crate::WordLensResult<Self> {
    config.validate()?;

    let http = HttpClient::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| CompletionError::ClientBuild(Arc::new(e)))?;

    Ok(Self {
      http,
      endpoint: config.chat_completions_url(),
      model: config.model.clone(),
      api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
    })
  }

  /// Returns the chat-completions endpoint this client posts to.
  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// Returns the configured model identifier.
  pub fn model(&self) -> &str {
    &self.model
  }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
  async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
    let api_key = self.api_key.as_deref().ok_or(CompletionError::MissingApiKey)?;

    let payload = ChatCompletionRequest {
      model: &self.model,
      messages: [ChatMessage {
        role: "user",
        content: &request.prompt,
      }],
      max_tokens: request.max_tokens,
    };

    debug!(endpoint = %self.endpoint, model = %self.model, "sending completion request");

    let response = self
      .http
      .post(&self.endpoint)
      .bearer_auth(api_key)
      .json(&payload)
      .send()
      .await
      .map_err(|e| CompletionError::Request(Arc::new(e)))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(CompletionError::Status {
        status: status.as_u16(),
        body,
      });
    }

    let envelope: ChatCompletionResponse = response
      .json()
      .await
      .map_err(|e| CompletionError::Decode(Arc::new(e)))?;

    Ok(first_choice_text(envelope))
  }
}

/// Text of the first candidate; empty when there is none.
fn first_choice_text(envelope: ChatCompletionResponse) -> String {
  let Some(choice) = envelope.choices.into_iter().next() else {
    warn!("completion response contained no choices");
    return String::new();
  };

  choice.message.and_then(|m| m.content).unwrap_or_default()
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
  model: &'a str,
  messages: [ChatMessage<'a>; 1],
  max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
  role: &'static str,
  content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
  #[serde(default)]
  choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
  #[serde(default)]
  message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
  #[serde(default)]
  content: Option<String>,
}
