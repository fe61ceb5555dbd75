//! Analysis session
//!
//! Holds everything that lives between a form submission and the feedback
//! click: the weight store, the engine, the learning rule, the bankroll and
//! the pending analysis. Feedback consumes the pending analysis, so a new
//! analysis is needed before the next outcome can be reported.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::engine::AnalysisEngine;
use crate::error::Result;
use crate::learning::{FixedStepRule, LearningRule, Outcome};
use crate::models::{AnalysisResult, MatchStats, Weights};
use crate::store::{self, HistoryEntry, KeyValueStore, WeightStore};

pub const WIN_MESSAGE: &str = "Won! Bankroll boosted.";
pub const LOSS_MESSAGE: &str = "Lost. Adjusting weights from the miss.";

/// Statistics and result of the most recent analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastAnalysis {
    pub stats: MatchStats,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub outcome: Outcome,
    pub previous: Weights,
    pub updated: Weights,
    pub message: String,
}

pub struct Session<S: KeyValueStore> {
    weight_store: WeightStore<S>,
    engine: AnalysisEngine,
    rule: Box<dyn LearningRule>,
    bankroll: f64,
    last_analysis: Option<LastAnalysis>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn open(backend: S, engine: AnalysisEngine, rule: Box<dyn LearningRule>) -> Self {
        let bankroll = store::load_bankroll(&backend);
        let weight_store = WeightStore::open(backend);
        log::info!("Session opened with bankroll {:.0}", bankroll);
        Self { weight_store, engine, rule, bankroll, last_analysis: None }
    }

    /// Default engine and the fixed-step learning rule.
    pub fn with_defaults(backend: S) -> Self {
        Self::open(backend, AnalysisEngine::default(), Box::new(FixedStepRule::default()))
    }

    /// Engine and learning steps taken from one config.
    pub fn with_config(backend: S, config: crate::config::EngineConfig) -> Self {
        let rule = FixedStepRule::new(config.learning);
        Self::open(backend, AnalysisEngine::new(config), Box::new(rule))
    }

    /// Analyzes with the current weights and keeps the result as pending.
    pub fn analyze(&mut self, stats: MatchStats) -> AnalysisResult {
        let result = self.engine.analyze(&stats, self.weight_store.weights());
        self.last_analysis = Some(LastAnalysis { stats, result: result.clone() });
        result
    }

    pub fn on_win(&mut self) -> Result<Option<FeedbackReport>> {
        self.record_outcome(Outcome::Win)
    }

    pub fn on_loss(&mut self) -> Result<Option<FeedbackReport>> {
        self.record_outcome(Outcome::Loss)
    }

    /// Applies the learning rule for `outcome`, persists the weights, logs
    /// the outcome and clears the pending analysis.
    ///
    /// Returns `Ok(None)` when there is no pending analysis. If the weights
    /// cannot be saved the session is left untouched.
    pub fn record_outcome(&mut self, outcome: Outcome) -> Result<Option<FeedbackReport>> {
        let Some(last) = self.last_analysis.as_ref() else {
            log::debug!("Ignoring {} feedback: no pending analysis", outcome);
            return Ok(None);
        };
        let entry = HistoryEntry {
            recorded_at: Utc::now(),
            outcome,
            verdict: last.result.verdict,
            confidence: last.result.confidence,
            league: last.stats.league.clone(),
        };

        let previous = *self.weight_store.weights();
        let updated = self.weight_store.update_with(self.rule.as_ref(), outcome)?;

        if let Err(err) = store::append_history(self.weight_store.backend_mut(), entry) {
            log::warn!("Failed to append history entry: {}", err);
        }

        self.last_analysis = None;

        let message = match outcome {
            Outcome::Win => WIN_MESSAGE,
            Outcome::Loss => LOSS_MESSAGE,
        };
        log::info!("Recorded {} feedback", outcome);

        Ok(Some(FeedbackReport { outcome, previous, updated, message: message.to_string() }))
    }

    pub fn weights(&self) -> &Weights {
        self.weight_store.weights()
    }

    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }

    pub fn last_analysis(&self) -> Option<&LastAnalysis> {
        self.last_analysis.as_ref()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        store::load_history(self.weight_store.backend())
    }

    pub fn backend(&self) -> &S {
        self.weight_store.backend()
    }

    pub fn into_backend(self) -> S {
        self.weight_store.into_backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::Verdict;
    use crate::store::{MemoryStore, BANKROLL_KEY, DEFAULT_BANKROLL, WEIGHTS_KEY};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(StoreError::Backend("offline".into()))
        }
    }

    fn over_stats() -> MatchStats {
        MatchStats::new(40.0, 60, 8, 5, 6, "Brésil")
    }

    #[test]
    fn test_feedback_without_analysis_is_ignored() {
        let mut session = Session::with_defaults(MemoryStore::new());
        assert_eq!(session.on_win().unwrap(), None);
        assert_eq!(*session.weights(), Weights::default());
        assert!(session.backend().load(WEIGHTS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_analyze_sets_pending() {
        let mut session = Session::with_defaults(MemoryStore::new());
        let result = session.analyze(over_stats());
        assert_eq!(result.verdict, Verdict::Over25);
        let last = session.last_analysis().unwrap();
        assert_eq!(last.result, result);
        assert_eq!(last.stats.league, "Brésil");
    }

    #[test]
    fn test_win_persists_and_resets() {
        let mut session = Session::with_defaults(MemoryStore::new());
        session.analyze(over_stats());

        let report = session.on_win().unwrap().unwrap();
        assert_eq!(report.outcome, Outcome::Win);
        assert_eq!(report.previous, Weights::default());
        assert!((report.updated.attack_weight - 0.72).abs() < 1e-12);
        assert_eq!(report.message, WIN_MESSAGE);

        assert!(session.last_analysis().is_none());
        assert_eq!(*session.weights(), report.updated);

        // second click without a new analysis does nothing
        assert_eq!(session.on_win().unwrap(), None);

        let history = session.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].verdict, Verdict::Over25);
        assert_eq!(history[0].confidence, 98);

        let reopened = Session::with_defaults(session.into_backend());
        assert_eq!(*reopened.weights(), report.updated);
    }

    #[test]
    fn test_loss_updates_shots_off_target() {
        let mut session = Session::with_defaults(MemoryStore::new());
        session.analyze(over_stats());
        let report = session.on_loss().unwrap().unwrap();
        assert!((report.updated.shots_off_target_weight + 0.55).abs() < 1e-12);
        assert_eq!(report.message, LOSS_MESSAGE);
    }

    #[test]
    fn test_failed_persist_keeps_session() {
        let mut session = Session::with_defaults(FailingStore);
        session.analyze(over_stats());

        assert!(session.on_win().is_err());
        assert_eq!(*session.weights(), Weights::default());
        assert!(session.last_analysis().is_some());
    }

    #[test]
    fn test_bankroll_loaded_at_open() {
        let mut backend = MemoryStore::new();
        assert_eq!(Session::with_defaults(backend.clone()).bankroll(), DEFAULT_BANKROLL);
        backend.save(BANKROLL_KEY, "42000").unwrap();
        assert_eq!(Session::with_defaults(backend).bankroll(), 42000.0);
    }

    #[test]
    fn test_with_config_uses_learning_steps() {
        let mut config = crate::config::EngineConfig::default();
        config.learning.loss_shots_off_target_delta = -1.0;
        let mut session = Session::with_config(MemoryStore::new(), config);
        session.analyze(over_stats());
        let report = session.on_loss().unwrap().unwrap();
        assert_eq!(report.updated.shots_off_target_weight, -1.5);
    }
}
