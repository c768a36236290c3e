//! HTTP handler definitions

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info};

use crate::errors::{ApiError, INVALID_BODY_MESSAGE, WORD_MISSING_MESSAGE};
use crate::models::{WordAnalysisRequest, WordAnalysisResponse};

use super::state::AppState;

/// POST /api/word-analysis endpoint
///
/// Asks the completion service for a child-friendly breakdown of one word.
///
/// # Request Body
/// ```json
/// { "word": "apple" }
/// ```
///
/// # Response
/// - 200 OK: `{ "meaning", "phonics", "syllables", "pronunciationGuide" }`
/// - 400 Bad Request: `{ "error" }` (missing or blank word, unreadable body)
/// - 500 Internal Server Error: `{ "error" }` (completion service failure)
pub async fn post_word_analysis(
  State(state): State<AppState>,
  payload: Result<Json<WordAnalysisRequest>, JsonRejection>,
) -> Result<Json<WordAnalysisResponse>, ApiError> {
  let Json(request) = payload.map_err(rejection_to_error)?;

  debug!(word = ?request.word, "word analysis request received");

  let response = state.service.analyze(request).await?;

  info!(
    guide_lines = response.pronunciation_guide.len(),
    "word analysis response sent"
  );

  Ok(Json(response))
}

/// Every body problem is a 400 with a JSON error, like a blank word.
fn rejection_to_error(rejection: JsonRejection) -> ApiError {
  debug!(reason = %rejection.body_text(), "request body rejected");
  match rejection {
    // Valid JSON of the wrong shape, e.g. `{ "word": 3 }`
    JsonRejection::JsonDataError(_) => ApiError::invalid_input(WORD_MISSING_MESSAGE),
    _ => ApiError::invalid_input(INVALID_BODY_MESSAGE),
  }
}

/// Health check endpoint
///
/// Confirms that the server is running.
pub async fn health_check() -> &'static str {
  "OK"
}
