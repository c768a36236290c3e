//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, ENV_API_BASE_URL, ENV_API_KEY, ENV_BIND_ADDR, ENV_HTTP_TIMEOUT_SECS,
  ENV_MAX_TOKENS, ENV_MODEL,
};
pub use env::Config;
