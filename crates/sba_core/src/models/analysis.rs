use serde::{Deserialize, Serialize};
use std::fmt;

/// Betting recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "NO_BET")]
    NoBet,
    #[serde(rename = "OVER_2_5")]
    Over25,
    #[serde(rename = "UNDER_2_5")]
    Under25,
    #[serde(rename = "AVOID_STERILE")]
    AvoidSterile,
}

impl Verdict {
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::NoBet => "NO_BET",
            Verdict::Over25 => "OVER_2_5",
            Verdict::Under25 => "UNDER_2_5",
            Verdict::AvoidSterile => "AVOID_STERILE",
        }
    }

    /// True for the two verdicts that recommend placing a bet.
    pub fn is_bet(&self) -> bool {
        matches!(self, Verdict::Over25 | Verdict::Under25)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::NoBet => write!(f, "NO BET"),
            Verdict::Over25 => write!(f, "OVER 2.5"),
            Verdict::Under25 => write!(f, "UNDER 2.5"),
            Verdict::AvoidSterile => write!(f, "AVOID (STERILE)"),
        }
    }
}

/// Intermediate values of one analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted sum of the statistics, after the sterile penalty
    pub linear_score: f64,
    pub over_score: f64,
    pub under_score: f64,
    /// `linear_score + over_score - under_score`
    pub combined: f64,
    /// Logistic confidence before league adjustment and clamping
    pub base_confidence: f64,
    pub league_delta: f64,
}

impl ScoreBreakdown {
    /// False when extreme weights overflowed the arithmetic. JSON has no
    /// encoding for such values.
    pub fn is_finite(&self) -> bool {
        self.linear_score.is_finite()
            && self.over_score.is_finite()
            && self.under_score.is_finite()
            && self.combined.is_finite()
            && self.base_confidence.is_finite()
            && self.league_delta.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    /// Integer confidence, always within the configured floor and ceiling
    pub confidence: u8,
    pub sterile_flag: bool,
    pub total_shots: i32,
    pub explanation: String,
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serde_names() {
        assert_eq!(serde_json::to_string(&Verdict::Over25).unwrap(), "\"OVER_2_5\"");
        assert_eq!(serde_json::to_string(&Verdict::AvoidSterile).unwrap(), "\"AVOID_STERILE\"");
        let v: Verdict = serde_json::from_str("\"NO_BET\"").unwrap();
        assert_eq!(v, Verdict::NoBet);
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::Under25.to_string(), "UNDER 2.5");
        assert_eq!(Verdict::Under25.code(), "UNDER_2_5");
        assert!(Verdict::Over25.is_bet());
        assert!(!Verdict::AvoidSterile.is_bet());
    }
}
