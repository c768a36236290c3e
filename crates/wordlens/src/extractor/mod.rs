//! Extractor module
//!
//! Turns free-text completions into a [`crate::WordAnalysis`]. Never fails:
//! a section the model left out becomes a sentinel value.

mod sections;

pub use sections::{
  GUIDE_NOT_FOUND, MEANING_NOT_FOUND, PHONICS_NOT_FOUND, SYLLABLES_NOT_FOUND, extract,
};
