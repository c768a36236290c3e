//! Prompt module
//!
//! The template and the section labels form one contract: the extractor scans
//! for exactly the labels the template asks the model to print.

mod template;

pub use template::{
  GUIDE_LABEL, MEANING_LABEL, PHONICS_LABEL, SYLLABLES_LABEL, build_prompt,
};
