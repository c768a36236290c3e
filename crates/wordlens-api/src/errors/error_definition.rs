//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use wordlens::errors::WordLensError;

/// Returned when `word` is missing or blank
pub const WORD_MISSING_MESSAGE: &str = "단어가 제공되지 않았습니다.";

/// Returned when the body is not a JSON object
pub const INVALID_BODY_MESSAGE: &str = "요청 본문이 올바른 JSON 형식이 아닙니다.";

/// Returned for every server-side failure; the cause only goes to the log
pub const GENERIC_FAILURE_MESSAGE: &str = "단어 분석 요청 실패";

/// Error kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Invalid input
  InvalidInput,
  /// Completion service failure
  Completion,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the error code (used in logs)
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::Completion => "completion_failed",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::Completion | Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Invalid input; the message is shown to the caller as-is
  #[error("{0}")]
  InvalidInput(String),

  /// Completion service failure
  #[error("completion error: {0}")]
  Completion(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("config error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::Completion(_) => ApiErrorKind::Completion,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Message placed in the response body.
  ///
  /// Only client errors echo their message; server errors never leak detail.
  #[must_use]
  pub fn public_message(&self) -> String {
    match self {
      Self::InvalidInput(message) => message.clone(),
      Self::Completion(_) | Self::Internal(_) | Self::Config(_) => {
        GENERIC_FAILURE_MESSAGE.to_string()
      }
    }
  }

  /// Creates an invalid input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// Creates a completion error
  #[must_use]
  pub fn completion(message: impl Into<String>) -> Self {
    Self::Completion(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON structure of error responses: `{ "error": "..." }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Human-readable message
  pub error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();

    if status.is_server_error() {
      error!(code = self.code(), error = %self, "단어 분석 오류");
    } else {
      debug!(code = self.code(), error = %self, "request rejected");
    }

    let body = ErrorResponse {
      error: self.public_message(),
    };

    (status, Json(body)).into_response()
  }
}

/// Conversion from WordLensError to ApiError
///
/// Maps domain layer errors to API layer errors.
impl From<WordLensError> for ApiError {
  fn from(err: WordLensError) -> Self {
    match err {
      WordLensError::InvalidInput { reason } => {
        debug!(reason = %reason, "word rejected");
        ApiError::invalid_input(WORD_MISSING_MESSAGE)
      }
      WordLensError::Completion(err) => ApiError::completion(err.to_string()),
      WordLensError::Config(err) => ApiError::config(err.to_string()),
      // #[non_exhaustive] enum; covers variants added later
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
