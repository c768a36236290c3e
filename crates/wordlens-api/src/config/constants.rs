//! API configuration constants

/// Default bind address
///
/// Port 5000 is what the client app expects during development.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Bind address (e.g. "0.0.0.0:5000")
pub const ENV_BIND_ADDR: &str = "WORDLENS_BIND_ADDR";

/// Completion API credential
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

/// Model identifier
pub const ENV_MODEL: &str = "WORDLENS_MODEL";

/// Output length hint
pub const ENV_MAX_TOKENS: &str = "WORDLENS_MAX_TOKENS";

/// Completion API base URL
pub const ENV_API_BASE_URL: &str = "WORDLENS_API_BASE_URL";

/// Outbound request timeout in seconds
pub const ENV_HTTP_TIMEOUT_SECS: &str = "WORDLENS_HTTP_TIMEOUT_SECS";
