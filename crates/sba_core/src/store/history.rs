use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, HISTORY_KEY};
use crate::error::Result;
use crate::learning::Outcome;
use crate::models::Verdict;

/// Maximum number of entries kept under `HISTORY_KEY`; the whole log is
/// rewritten on every append.
pub const HISTORY_LIMIT: usize = 500;

/// One reported bet outcome. The log is bounded and never analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub outcome: Outcome,
    pub verdict: Verdict,
    pub confidence: u8,
    pub league: String,
}

/// Stored feedback log; an unreadable log is treated as empty.
pub fn load_history<S: KeyValueStore + ?Sized>(store: &S) -> Vec<HistoryEntry> {
    match store.load(HISTORY_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("Discarding malformed history: {}", err);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(err) => {
            log::warn!("Failed to read history: {}", err);
            Vec::new()
        }
    }
}

/// Appends `entry`, dropping the oldest entries beyond `HISTORY_LIMIT`.
pub fn append_history<S: KeyValueStore + ?Sized>(store: &mut S, entry: HistoryEntry) -> Result<()> {
    append_with_limit(store, entry, HISTORY_LIMIT)
}

fn append_with_limit<S: KeyValueStore + ?Sized>(
    store: &mut S,
    entry: HistoryEntry,
    limit: usize,
) -> Result<()> {
    let mut entries = load_history(store);
    entries.push(entry);
    if entries.len() > limit {
        let excess = entries.len() - limit;
        entries.drain(..excess);
    }
    let json = serde_json::to_string(&entries)?;
    store.save(HISTORY_KEY, &json)
}
