//! Response model definition

use serde::{Deserialize, Serialize};
use wordlens::WordAnalysis;

/// Word analysis response
///
/// Field names are camelCase on the wire (`pronunciationGuide`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysisResponse {
  /// Simple definition
  pub meaning: String,
  /// IPA transcription
  pub phonics: String,
  /// Syllable breakdown with stress
  pub syllables: String,
  /// Pronunciation guide lines, in the order the model wrote them
  pub pronunciation_guide: Vec<String>,
}

impl From<WordAnalysis> for WordAnalysisResponse {
  fn from(analysis: WordAnalysis) -> Self {
    Self {
      meaning: analysis.meaning,
      phonics: analysis.phonics,
      syllables: analysis.syllables,
      pronunciation_guide: analysis.pronunciation_guide,
    }
  }
}
