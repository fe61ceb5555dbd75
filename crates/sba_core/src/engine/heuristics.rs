//! Rule-of-thumb overrides layered on top of the linear score.
//!
//! The three checks are independent and always evaluated in the same order:
//! sterile domination, over profile, under profile.

use crate::models::MatchStats;

pub const STERILE_MIN_POSSESSION: f64 = 60.0;
pub const STERILE_MAX_CORNERS: i32 = 3;
pub const STERILE_MAX_SHOTS_ON_TARGET: i32 = 2;
pub const STERILE_PENALTY: f64 = 30.0;

pub const OVER_MIN_DANGEROUS_ATTACKS: i32 = 50;
pub const OVER_MIN_TOTAL_SHOTS: i32 = 10;
pub const OVER_MIN_CORNERS: i32 = 4;
pub const OVER_BONUS: f64 = 40.0;

pub const UNDER_MAX_DANGEROUS_ATTACKS: i32 = 35;
pub const UNDER_MAX_TOTAL_SHOTS: i32 = 6;
pub const UNDER_MAX_CORNERS: i32 = 3;
/// Above this many off-target shots the under signal is weakened
pub const UNDER_IMPRECISION_SHOTS_OFF_TARGET: i32 = 4;
pub const UNDER_BONUS: f64 = 40.0;
pub const UNDER_IMPRECISE_BONUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeuristicSignals {
    pub sterile: bool,
    /// Amount subtracted from the linear score
    pub sterile_penalty: f64,
    pub over_score: f64,
    pub under_score: f64,
}

/// High possession without corners or shots on target.
pub fn is_sterile_domination(stats: &MatchStats) -> bool {
    stats.possession > STERILE_MIN_POSSESSION
        && stats.corners < STERILE_MAX_CORNERS
        && stats.shots_on_target < STERILE_MAX_SHOTS_ON_TARGET
}

pub fn is_over_profile(stats: &MatchStats) -> bool {
    stats.dangerous_attacks > OVER_MIN_DANGEROUS_ATTACKS
        && stats.total_shots() > OVER_MIN_TOTAL_SHOTS
        && stats.corners > OVER_MIN_CORNERS
}

pub fn is_under_profile(stats: &MatchStats) -> bool {
    stats.dangerous_attacks < UNDER_MAX_DANGEROUS_ATTACKS
        && stats.total_shots() < UNDER_MAX_TOTAL_SHOTS
        && stats.corners < UNDER_MAX_CORNERS
}

pub fn evaluate(stats: &MatchStats) -> HeuristicSignals {
    let mut signals = HeuristicSignals::default();

    if is_sterile_domination(stats) {
        signals.sterile = true;
        signals.sterile_penalty = STERILE_PENALTY;
    }

    if is_over_profile(stats) {
        signals.over_score += OVER_BONUS;
    }

    if is_under_profile(stats) {
        if stats.shots_off_target > UNDER_IMPRECISION_SHOTS_OFF_TARGET {
            signals.under_score += UNDER_IMPRECISE_BONUS;
        } else {
            signals.under_score += UNDER_BONUS;
        }
    }

    signals
}
