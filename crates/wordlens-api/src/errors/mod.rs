//! errors module
mod error_definition;

pub use error_definition::{
  ApiError, ApiErrorKind, ErrorResponse, GENERIC_FAILURE_MESSAGE, INVALID_BODY_MESSAGE,
  WORD_MISSING_MESSAGE, Result,
};
