//! Data model definitions

use serde::Serialize;

/// Structured breakdown of one word.
///
/// Serialized with camelCase keys, which is what the client app reads:
/// `{ "meaning", "phonics", "syllables", "pronunciationGuide" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
  /// Simple definition
  pub meaning: String,
  /// IPA transcription
  pub phonics: String,
  /// Syllable breakdown with stress
  pub syllables: String,
  /// Numbered syllable-by-syllable pronunciation lines, in source order
  pub pronunciation_guide: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_with_camel_case_keys() {
    let analysis = WordAnalysis {
      meaning: "사과".to_string(),
      phonics: "/ˈæp.əl/".to_string(),
      syllables: "ap-ple".to_string(),
      pronunciation_guide: vec!["1. ap - 애".to_string()],
    };

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["meaning"], "사과");
    assert_eq!(json["pronunciationGuide"][0], "1. ap - 애");
    assert!(json.get("pronunciation_guide").is_none());
  }
}
