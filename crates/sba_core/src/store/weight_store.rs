use super::{KeyValueStore, WEIGHTS_KEY};
use crate::error::Result;
use crate::learning::{self, LearningRule};
use crate::models::Weights;

/// Owns the current weights and their persisted copy.
#[derive(Debug)]
pub struct WeightStore<S: KeyValueStore> {
    backend: S,
    weights: Weights,
}

impl<S: KeyValueStore> WeightStore<S> {
    /// Loads persisted weights, falling back to the defaults. Never fails.
    pub fn open(backend: S) -> Self {
        let weights = Self::load_from(&backend);
        Self { backend, weights }
    }

    fn load_from(backend: &S) -> Weights {
        let raw = match backend.load(WEIGHTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored weights, using defaults");
                return Weights::default();
            }
            Err(err) => {
                log::warn!("Failed to read stored weights, using defaults: {}", err);
                return Weights::default();
            }
        };

        match serde_json::from_str::<Weights>(&raw) {
            Ok(weights) => weights,
            Err(err) => {
                log::warn!("Stored weights are malformed, using defaults: {}", err);
                Weights::default()
            }
        }
    }

    /// Re-reads the persisted weights and makes them current.
    pub fn load(&mut self) -> Weights {
        self.weights = Self::load_from(&self.backend);
        self.weights
    }

    /// Persists `weights` and makes them current. On failure the current
    /// value is left as it was.
    pub fn save(&mut self, weights: Weights) -> Result<()> {
        let json = serde_json::to_string(&weights)?;
        if let Err(err) = self.backend.save(WEIGHTS_KEY, &json) {
            log::error!("Failed to persist weights: {}", err);
            return Err(err);
        }
        self.weights = weights;
        log::info!("Weights saved: {:?}", weights);
        Ok(())
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Win update with the default step sizes.
    pub fn reinforce_win(weights: &Weights) -> Weights {
        learning::reinforce_win(weights)
    }

    /// Loss update with the default step sizes.
    pub fn reinforce_loss(weights: &Weights) -> Weights {
        learning::reinforce_loss(weights)
    }

    /// Applies `rule` to the current weights and persists the result.
    pub fn update_with<R: LearningRule + ?Sized>(
        &mut self,
        rule: &R,
        outcome: learning::Outcome,
    ) -> Result<Weights> {
        let next = rule.apply(&self.weights, outcome);
        self.save(next)?;
        Ok(next)
    }
}
