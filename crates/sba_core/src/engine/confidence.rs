use crate::config::LeagueAdjustment;

/// Logistic squashing of the combined score onto 0..100.
pub fn logistic_confidence(combined: f64, scale: f64) -> f64 {
    100.0 / (1.0 + (-combined / scale).exp())
}

/// Sum of the deltas of every adjustment group matching the league name.
pub fn league_delta(league: &str, table: &[LeagueAdjustment]) -> f64 {
    table.iter().filter(|adj| adj.matches(league)).fold(0.0, |acc, adj| acc + adj.delta)
}

/// Clamps into `[floor, ceiling]` and rounds half away from zero.
/// NaN lands on the floor.
pub fn clamp_and_round(confidence: f64, floor: u8, ceiling: u8) -> u8 {
    if confidence.is_nan() {
        log::warn!("Confidence is not a number, using floor {}", floor);
        return floor;
    }
    let clamped = confidence.clamp(f64::from(floor), f64::from(ceiling));
    clamped.round() as u8
}
