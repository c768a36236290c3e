//! Model module

mod request;
mod response;

pub use request::WordAnalysisRequest;
pub use response::WordAnalysisResponse;
