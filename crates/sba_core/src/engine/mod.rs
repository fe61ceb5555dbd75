//! # Analysis Engine
//!
//! Pure scoring pipeline: linear score, heuristic overrides, logistic
//! confidence, league adjustment, clamping, verdict and explanation.
//!
//! - `scoring` - weighted linear score
//! - `heuristics` - sterile / over / under profiles
//! - `confidence` - logistic mapping, league table, clamping
//! - `verdict` - verdict decision and explanation text

pub mod confidence;
pub mod heuristics;
pub mod scoring;
pub mod verdict;


use crate::config::EngineConfig;
use crate::models::{AnalysisResult, MatchStats, ScoreBreakdown, Weights};

#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: EngineConfig,
}

impl AnalysisEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Scores one set of match statistics. Deterministic for a given input.
    pub fn analyze(&self, stats: &MatchStats, weights: &Weights) -> AnalysisResult {
        let total_shots = stats.total_shots();

        let signals = heuristics::evaluate(stats);
        let linear_score = scoring::linear_score(stats, weights) - signals.sterile_penalty;
        let combined = linear_score + (signals.over_score - signals.under_score);

        let base_confidence =
            confidence::logistic_confidence(combined, self.config.sigmoid_scale);
        let league_delta = confidence::league_delta(&stats.league, &self.config.leagues);

        let (floor, ceiling) = self.config.confidence_bounds();
        let confidence =
            confidence::clamp_and_round(base_confidence + league_delta, floor, ceiling);

        let verdict = verdict::decide(
            confidence,
            self.config.verdict_threshold,
            signals.over_score,
            signals.under_score,
            signals.sterile,
        );
        let explanation = verdict::explain(stats, verdict, signals.sterile);

        log::debug!(
            "analysis league={:?} combined={:.3} base={:.3} league_delta={} confidence={} verdict={}",
            stats.league,
            combined,
            base_confidence,
            league_delta,
            confidence,
            verdict.code()
        );

        AnalysisResult {
            verdict,
            confidence,
            sterile_flag: signals.sterile,
            total_shots,
            explanation,
            breakdown: ScoreBreakdown {
                linear_score,
                over_score: signals.over_score,
                under_score: signals.under_score,
                combined,
                base_confidence,
                league_delta,
            },
        }
    }
}

/// Analysis with the default engine configuration.
pub fn analyze(stats: &MatchStats, weights: &Weights) -> AnalysisResult {
    AnalysisEngine::default().analyze(stats, weights)
}
