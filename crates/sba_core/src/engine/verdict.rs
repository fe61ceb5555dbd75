use crate::models::{MatchStats, Verdict};

pub const STERILE_EXPLANATION: &str =
    "Warning: the team dominates but puts nothing on target. High risk of a goalless score.";
pub const UNDER_EXPLANATION: &str =
    "Very slow match tempo. Few clear chances. Closed match profile.";
pub const NO_SIGNAL_EXPLANATION: &str =
    "The statistics are too balanced or insufficient to justify a bet.";

/// Picks the verdict from the final confidence and the heuristic signals.
/// Sterile domination overrides everything else.
pub fn decide(
    confidence: u8,
    threshold: u8,
    over_score: f64,
    under_score: f64,
    sterile: bool,
) -> Verdict {
    let mut verdict = Verdict::NoBet;
    if confidence > threshold {
        verdict = if over_score > under_score { Verdict::Over25 } else { Verdict::Under25 };
    }
    if sterile {
        verdict = Verdict::AvoidSterile;
    }
    verdict
}

pub fn explain(stats: &MatchStats, verdict: Verdict, sterile: bool) -> String {
    if sterile {
        return STERILE_EXPLANATION.to_string();
    }
    match verdict {
        Verdict::Over25 => format!(
            "High intensity detected ({} DA). The shot volume ({}) favours goals.",
            stats.dangerous_attacks,
            stats.total_shots()
        ),
        Verdict::Under25 => UNDER_EXPLANATION.to_string(),
        _ => NO_SIGNAL_EXPLANATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(decide(75, 75, 40.0, 0.0, false), Verdict::NoBet);
        assert_eq!(decide(76, 75, 40.0, 0.0, false), Verdict::Over25);
    }

    #[test]
    fn test_ties_go_under() {
        assert_eq!(decide(90, 75, 0.0, 0.0, false), Verdict::Under25);
        assert_eq!(decide(90, 75, 40.0, 40.0, false), Verdict::Under25);
    }

    #[test]
    fn test_sterile_wins() {
        assert_eq!(decide(98, 75, 40.0, 0.0, true), Verdict::AvoidSterile);
        assert_eq!(decide(5, 75, 0.0, 0.0, true), Verdict::AvoidSterile);
    }

    #[test]
    fn test_explanations() {
        let stats = MatchStats::new(40.0, 60, 8, 5, 6, "");
        let over = explain(&stats, Verdict::Over25, false);
        assert!(over.contains("60 DA"));
        assert!(over.contains("(13)"));
        assert_eq!(explain(&stats, Verdict::Under25, false), UNDER_EXPLANATION);
        assert_eq!(explain(&stats, Verdict::NoBet, false), NO_SIGNAL_EXPLANATION);
        assert_eq!(explain(&stats, Verdict::AvoidSterile, true), STERILE_EXPLANATION);
    }
}
