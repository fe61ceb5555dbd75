use serde::{Deserialize, Serialize};

pub const DEFAULT_ATTACK_WEIGHT: f64 = 0.7;
pub const DEFAULT_SHOTS_ON_TARGET_WEIGHT: f64 = 1.5;
pub const DEFAULT_SHOTS_OFF_TARGET_WEIGHT: f64 = -0.5;
pub const DEFAULT_CORNERS_WEIGHT: f64 = 1.2;
pub const DEFAULT_BIAS: f64 = 0.0;

/// Coefficients of the linear match score.
///
/// No bounds are enforced: feedback may push any coefficient anywhere.
/// Older blobs written with the `wDA`/`wTC`/`wTNC`/`wCorners` keys still load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    #[serde(alias = "wDA")]
    pub attack_weight: f64,
    #[serde(alias = "wTC")]
    pub shots_on_target_weight: f64,
    #[serde(alias = "wTNC")]
    pub shots_off_target_weight: f64,
    #[serde(alias = "wCorners")]
    pub corners_weight: f64,
    pub bias: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            attack_weight: DEFAULT_ATTACK_WEIGHT,
            shots_on_target_weight: DEFAULT_SHOTS_ON_TARGET_WEIGHT,
            shots_off_target_weight: DEFAULT_SHOTS_OFF_TARGET_WEIGHT,
            corners_weight: DEFAULT_CORNERS_WEIGHT,
            bias: DEFAULT_BIAS,
        }
    }
}
