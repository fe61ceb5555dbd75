use serde::{Deserialize, Serialize};
use validator::Validate;

/// Live statistics for one match, as read off a scoreboard.
///
/// The engine accepts any finite values. `validate()` is there for callers
/// that want to reject impossible input before analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    /// Ball possession in percent
    #[validate(range(min = 0.0, max = 100.0))]
    pub possession: f64,

    /// Dangerous attacks (DA)
    #[serde(alias = "da")]
    #[validate(range(min = 0))]
    pub dangerous_attacks: i32,

    /// Shots on target (TC)
    #[serde(alias = "tc")]
    #[validate(range(min = 0))]
    pub shots_on_target: i32,

    /// Shots off target (TNC)
    #[serde(alias = "tnc")]
    #[validate(range(min = 0))]
    pub shots_off_target: i32,

    #[validate(range(min = 0))]
    pub corners: i32,

    /// Free-text league name, matched against the league adjustment table
    pub league: String,

    /// Current score, display only
    #[serde(default)]
    pub score: String,
}

impl MatchStats {
    pub fn new(
        possession: f64,
        dangerous_attacks: i32,
        shots_on_target: i32,
        shots_off_target: i32,
        corners: i32,
        league: impl Into<String>,
    ) -> Self {
        Self {
            possession,
            dangerous_attacks,
            shots_on_target,
            shots_off_target,
            corners,
            league: league.into(),
            score: String::new(),
        }
    }

    pub fn with_score(mut self, score: impl Into<String>) -> Self {
        self.score = score.into();
        self
    }

    pub fn total_shots(&self) -> i32 {
        self.shots_on_target.saturating_add(self.shots_off_target)
    }
}
