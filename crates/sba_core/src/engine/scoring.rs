use crate::models::{MatchStats, Weights};

/// Weighted sum of the match statistics plus bias.
pub fn linear_score(stats: &MatchStats, weights: &Weights) -> f64 {
    weights.attack_weight * f64::from(stats.dangerous_attacks)
        + weights.shots_on_target_weight * f64::from(stats.shots_on_target)
        + weights.shots_off_target_weight * f64::from(stats.shots_off_target)
        + weights.corners_weight * f64::from(stats.corners)
        + weights.bias
}
