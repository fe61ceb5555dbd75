//! # sba_core - Live Match Bet Analyzer
//!
//! Scores a live football match from a handful of in-game statistics and
//! returns a verdict (over / under 2.5 goals, no bet, or avoid) with a
//! bounded confidence value. Win/loss feedback nudges the linear weights,
//! which are persisted through a small key-value contract.
//!
//! ## Layout
//! - `models` - match statistics, weights, verdicts and results
//! - `engine` - linear scoring, heuristic overrides, confidence mapping
//! - `learning` - pluggable weight update rule
//! - `store` - key-value backends and the weight store
//! - `session` - explicit session state (pending analysis, feedback)
//! - `api` - JSON bridge for presentation layers
//!
//! ```
//! use sba_core::{analyze, MatchStats, Verdict, Weights};
//!
//! let stats = MatchStats::new(70.0, 10, 1, 1, 2, "Togo");
//! let result = analyze(&stats, &Weights::default());
//! assert_eq!(result.verdict, Verdict::AvoidSterile);
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod learning;
pub mod models;
pub mod session;
pub mod store;

#[cfg(test)]
mod session_test;

pub use config::{EngineConfig, LeagueAdjustment, LearningConfig};
pub use engine::{analyze, AnalysisEngine};
pub use error::{ConfigError, Result, StoreError};
pub use learning::{reinforce_loss, reinforce_win, FixedStepRule, LearningRule, Outcome};
pub use models::{AnalysisResult, MatchStats, ScoreBreakdown, Verdict, Weights};
pub use session::{FeedbackReport, LastAnalysis, Session};
pub use store::{FileStore, KeyValueStore, MemoryStore, WeightStore};
