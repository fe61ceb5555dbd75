// Analysis JSON API for presentation layers
use serde::{Deserialize, Serialize};

use crate::engine::AnalysisEngine;
use crate::models::{AnalysisResult, MatchStats, Weights};

pub const API_SCHEMA_VERSION: u8 = 1;

/// Analysis request sent by the UI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub stats: MatchStats,
    /// Falls back to the default weights when omitted
    #[serde(default)]
    pub weights: Option<Weights>,
}

/// Analysis response returned to the UI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisResponse {
    pub schema_version: u8,
    pub success: bool,
    pub result: Option<AnalysisResult>,
    pub error_message: Option<String>,
}

fn default_schema_version() -> u8 {
    API_SCHEMA_VERSION
}

impl AnalysisResponse {
    fn ok(result: AnalysisResult) -> Self {
        Self {
            schema_version: API_SCHEMA_VERSION,
            success: true,
            result: Some(result),
            error_message: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            schema_version: API_SCHEMA_VERSION,
            success: false,
            result: None,
            error_message: Some(message),
        }
    }
}

/// Runs one analysis from a JSON request and returns a JSON response.
/// Errors are reported inside the response, never as a panic.
pub fn analyze_json(request_json: &str) -> String {
    analyze_json_with(&AnalysisEngine::default(), request_json)
}

pub fn analyze_json_with(engine: &AnalysisEngine, request_json: &str) -> String {
    let response = match serde_json::from_str::<AnalysisRequest>(request_json) {
        Ok(request) => {
            if request.schema_version != API_SCHEMA_VERSION {
                log::warn!(
                    "Request schema version {} differs from {}",
                    request.schema_version,
                    API_SCHEMA_VERSION
                );
            }
            let weights = request.weights.unwrap_or_default();
            let result = engine.analyze(&request.stats, &weights);
            if result.breakdown.is_finite() {
                AnalysisResponse::ok(result)
            } else {
                log::warn!("Score overflowed for weights {:?}", weights);
                AnalysisResponse::error(
                    "Score overflow: the weights are too large to produce a finite score"
                        .to_string(),
                )
            }
        }
        Err(err) => {
            log::warn!("Rejected analysis request: {}", err);
            AnalysisResponse::error(format!("Invalid request: {}", err))
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|err| {
        format!(
            r#"{{"schema_version":{},"success":false,"result":null,"error_message":"serialization failed: {}"}}"#,
            API_SCHEMA_VERSION,
            err.to_string().replace('"', "'")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verdict;

    #[test]
    fn test_analyze_json_default_weights() {
        let request = r#"{
            "schema_version": 1,
            "stats": {"possession": 70, "da": 10, "tc": 1, "tnc": 1, "corners": 2, "league": "Togo"}
        }"#;
        let response: AnalysisResponse = serde_json::from_str(&analyze_json(request)).unwrap();
        assert!(response.success);
        let result = response.result.unwrap();
        assert_eq!(result.verdict, Verdict::AvoidSterile);
        assert!(result.sterile_flag);
    }

    #[test]
    fn test_analyze_json_custom_weights() {
        let request = serde_json::json!({
            "stats": {
                "possession": 50, "dangerousAttacks": 40, "shotsOnTarget": 3,
                "shotsOffTarget": 3, "corners": 3, "league": "Togo"
            },
            "weights": {
                "attackWeight": 0.0, "shotsOnTargetWeight": 0.0, "shotsOffTargetWeight": 0.0,
                "cornersWeight": 0.0, "bias": 1000.0
            }
        });
        let response: AnalysisResponse =
            serde_json::from_str(&analyze_json(&request.to_string())).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result.confidence, 98);
        assert_eq!(result.verdict, Verdict::Under25);
    }

    #[test]
    fn test_analyze_json_invalid_request() {
        let response: AnalysisResponse =
            serde_json::from_str(&analyze_json("{\"stats\": 12}")).unwrap();
        assert!(!response.success);
        assert!(response.result.is_none());
        assert!(response.error_message.unwrap().starts_with("Invalid request"));
    }

    #[test]
    fn test_overflowing_weights_give_readable_error() {
        let request = serde_json::json!({
            "stats": {"possession": 50, "da": 60, "tc": 10, "tnc": 0, "corners": 0, "league": "Togo"},
            "weights": {
                "attackWeight": 1e308, "shotsOnTargetWeight": -1e308, "shotsOffTargetWeight": 0.0,
                "cornersWeight": 0.0, "bias": 0.0
            }
        });
        let json = analyze_json(&request.to_string());
        let response: AnalysisResponse = serde_json::from_str(&json).unwrap();
        assert!(!response.success);
        assert!(response.result.is_none());
        assert!(response.error_message.unwrap().contains("overflow"));
    }

    #[test]
    fn test_success_response_reads_back() {
        let request = r#"{"stats": {"possession": 58, "da": 47, "tc": 4, "tnc": 6, "corners": 5, "league": "Togo"}}"#;
        let response: AnalysisResponse = serde_json::from_str(&analyze_json(request)).unwrap();
        assert!(response.success);
        let breakdown = response.result.unwrap().breakdown;
        assert!(breakdown.is_finite());
        assert!(breakdown.league_delta.is_sign_positive());
    }

    #[test]
    fn test_response_uses_verdict_codes() {
        let request = r#"{"stats": {"possession": 40, "da": 60, "tc": 8, "tnc": 5, "corners": 6, "league": "Brésil"}}"#;
        let value: serde_json::Value = serde_json::from_str(&analyze_json(request)).unwrap();
        assert_eq!(value["result"]["verdict"], "OVER_2_5");
        assert_eq!(value["result"]["confidence"], 98);
    }
}
