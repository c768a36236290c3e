//! Completion module
//!
//! [`CompletionClient`] is the seam between the analyzer and the language-model
//! service. Production uses [`OpenAiCompletionClient`]; tests plug in stubs.

mod client;
mod openai;

pub use client::{CompletionClient, CompletionRequest};
pub use openai::OpenAiCompletionClient;
