//! wordlens word analysis library
//!
//! Asks an LLM completion API for a child-friendly breakdown of an English word
//! and turns the free-text reply into a [`WordAnalysis`].

/// Configuration module - completion endpoint, model and limits
pub mod config;

/// Completion module - `CompletionClient` trait and the OpenAI-compatible client
pub mod completion;

/// Error module - WordLensError, CompletionError, WordLensResult
pub mod errors;

/// Extractor module - turns completion text into a structured analysis
pub mod extractor;

/// Data model module - WordAnalysis
pub mod models;

/// Prompt module - fixed prompt template and section labels
pub mod prompt;

/// Service module - WordAnalyzer, the validate/prompt/complete/extract pipeline
pub mod service;

/// Re-exports
pub use completion::{CompletionClient, OpenAiCompletionClient};
pub use config::CompletionConfig;
pub use errors::{CompletionError, WordLensError, WordLensResult};
pub use extractor::extract;
pub use models::WordAnalysis;
pub use service::WordAnalyzer;
