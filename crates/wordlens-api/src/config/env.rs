//! Config loading from environment variables

use std::str::FromStr;
use std::time::Duration;

use wordlens::CompletionConfig;

use super::constants::{
  DEFAULT_BIND_ADDR, ENV_API_BASE_URL, ENV_API_KEY, ENV_BIND_ADDR, ENV_HTTP_TIMEOUT_SECS,
  ENV_MAX_TOKENS, ENV_MODEL,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5000")
  pub bind_addr: String,
  /// Completion service settings (credential, model, limits)
  pub completion: CompletionConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup.
  ///
  /// `from_env` delegates here; tests pass a map instead of mutating the
  /// process environment (`set_var` is unsafe in Rust 2024).
  ///
  /// # Errors
  /// Returns an error if a numeric value cannot be parsed or the resulting
  /// completion settings are invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    // Blank values count as unset
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let bind_addr = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let mut completion = CompletionConfig {
      api_key: get(ENV_API_KEY),
      ..CompletionConfig::default()
    };

    if let Some(model) = get(ENV_MODEL) {
      completion.model = model;
    }
    if let Some(base_url) = get(ENV_API_BASE_URL) {
      completion.api_base_url = base_url;
    }
    if let Some(raw) = get(ENV_MAX_TOKENS) {
      completion.max_tokens = parse_number(ENV_MAX_TOKENS, &raw)?;
    }
    if let Some(raw) = get(ENV_HTTP_TIMEOUT_SECS) {
      completion.timeout = Duration::from_secs(parse_number(ENV_HTTP_TIMEOUT_SECS, &raw)?);
    }

    completion
      .validate()
      .map_err(|e| ApiError::config(format!("{e}")))?;

    Ok(Self {
      bind_addr,
      completion,
    })
  }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> crate::errors::Result<T> {
  raw
    .trim()
    .parse()
    .map_err(|_| ApiError::config(format!("{key} must be a non-negative integer: {raw}")))
}
