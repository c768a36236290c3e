//! wordlens-api crate
//!
//! Web server exposing child-friendly word analysis as an HTTP API.
//!
//! ## Endpoints
//! - `POST /api/word-analysis` - Word analysis (meaning, IPA, syllables, pronunciation guide)
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/api/word-analysis \
//!   -H "Content-Type: application/json" \
//!   -d '{"word": "apple"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{WordAnalysisRequest, WordAnalysisResponse};
pub use service::WordAnalysisApiServiceFull;
