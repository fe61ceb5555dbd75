pub mod json_api;

pub use json_api::{analyze_json, analyze_json_with, AnalysisRequest, AnalysisResponse, API_SCHEMA_VERSION};
