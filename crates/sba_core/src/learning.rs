//! Weight updates from reported bet outcomes.
//!
//! Updates are additive with no floor, ceiling or decay. Repeated feedback
//! can move a coefficient arbitrarily far from its default.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::LearningConfig;
use crate::models::Weights;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

/// Policy turning an outcome into new weights. Implementations must not
/// mutate the input.
pub trait LearningRule {
    fn on_win(&self, weights: &Weights) -> Weights;

    fn on_loss(&self, weights: &Weights) -> Weights;

    fn apply(&self, weights: &Weights, outcome: Outcome) -> Weights {
        match outcome {
            Outcome::Win => self.on_win(weights),
            Outcome::Loss => self.on_loss(weights),
        }
    }
}

/// Constant-step rule: a win strengthens the attack and shots-on-target
/// coefficients, a loss pushes the shots-off-target coefficient down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedStepRule {
    steps: LearningConfig,
}

impl FixedStepRule {
    pub fn new(steps: LearningConfig) -> Self {
        Self { steps }
    }
}

impl LearningRule for FixedStepRule {
    fn on_win(&self, weights: &Weights) -> Weights {
        Weights {
            attack_weight: weights.attack_weight + self.steps.win_attack_delta,
            shots_on_target_weight: weights.shots_on_target_weight
                + self.steps.win_shots_on_target_delta,
            ..*weights
        }
    }

    fn on_loss(&self, weights: &Weights) -> Weights {
        Weights {
            shots_off_target_weight: weights.shots_off_target_weight
                + self.steps.loss_shots_off_target_delta,
            ..*weights
        }
    }
}

pub fn reinforce_win(weights: &Weights) -> Weights {
    FixedStepRule::default().on_win(weights)
}

pub fn reinforce_loss(weights: &Weights) -> Weights {
    FixedStepRule::default().on_loss(weights)
}
