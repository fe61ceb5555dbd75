//! # Models
//!
//! - `stats` - live match statistics fed to the engine
//! - `weights` - linear model coefficients
//! - `analysis` - verdicts and analysis results

pub mod analysis;
pub mod stats;
pub mod weights;

pub use analysis::{AnalysisResult, ScoreBreakdown, Verdict};
pub use stats::MatchStats;
pub use weights::Weights;
