//! Persistence for weights, bankroll and the feedback history.
//!
//! Everything goes through `KeyValueStore`, a string-keyed load/save
//! contract. `MemoryStore` keeps values in a map, `FileStore` writes one
//! JSON file per key.

pub mod file;
pub mod history;
pub mod memory;
pub mod weight_store;

pub use file::FileStore;
pub use history::{append_history, load_history, HistoryEntry, HISTORY_LIMIT};
pub use memory::MemoryStore;
pub use weight_store::WeightStore;

use crate::error::Result;

pub const WEIGHTS_KEY: &str = "sba_weights";
pub const BANKROLL_KEY: &str = "sba_bankroll";
pub const HISTORY_KEY: &str = "sba_history";

pub const DEFAULT_BANKROLL: f64 = 100_000.0;

pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when nothing was saved.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Bankroll balance read at session start. Absent, unreadable, zero or
/// non-finite values fall back to `DEFAULT_BANKROLL`.
pub fn load_bankroll<S: KeyValueStore + ?Sized>(store: &S) -> f64 {
    let raw = match store.load(BANKROLL_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return DEFAULT_BANKROLL,
        Err(err) => {
            log::warn!("Failed to read bankroll, using default: {}", err);
            return DEFAULT_BANKROLL;
        }
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => {
            log::warn!("Stored bankroll {:?} is unusable, using default", raw);
            DEFAULT_BANKROLL
        }
    }
}
