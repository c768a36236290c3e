//! Service module

mod word_analysis_api_service;

pub use word_analysis_api_service::{WordAnalysisApiService, WordAnalysisApiServiceFull};
