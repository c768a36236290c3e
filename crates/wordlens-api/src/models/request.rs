//! Request model definition

use serde::Deserialize;

/// Word analysis request
#[derive(Debug, Deserialize)]
pub struct WordAnalysisRequest {
  /// Word to analyze. A missing field is a validation error, not a parse error.
  #[serde(default)]
  pub word: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"word": "apple"}"#;
    let req: WordAnalysisRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.word.as_deref(), Some("apple"));
  }

  #[test]
  fn deserialize_missing_word() {
    let req: WordAnalysisRequest = serde_json::from_str("{}").unwrap();
    assert!(req.word.is_none());
  }

  #[test]
  fn deserialize_null_word() {
    let req: WordAnalysisRequest = serde_json::from_str(r#"{"word": null}"#).unwrap();
    assert!(req.word.is_none());
  }

  #[test]
  fn deserialize_ignores_unknown_fields() {
    let req: WordAnalysisRequest =
      serde_json::from_str(r#"{"word": "apple", "lang": "ko"}"#).unwrap();
    assert_eq!(req.word.as_deref(), Some("apple"));
  }
}
