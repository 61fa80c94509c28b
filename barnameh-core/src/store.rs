//! Persistence seam: the key-value store collaborator and whole-state
//! (de)serialization.
//!
//! The planner is serialized as one JSON document mapping date keys to
//! event lists, written back in full after every mutation. Loading is
//! fail-soft: a planner with unreadable history starts empty rather than
//! refusing to start.

use crate::error::{PlannerError, PlannerResult};
use crate::state::PlannerState;

/// Storage key for the serialized planner state.
pub const STATE_KEY: &str = "barnameh-data";

/// External key-value store collaborator. Last-write-wins, no transactions.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> PlannerResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> PlannerResult<()>;
}

/// Load the planner state from the store under [`STATE_KEY`].
///
/// An absent value, a read failure or unparseable content all yield an
/// empty state; this path never errors.
pub fn load_state(store: &impl KeyValueStore) -> PlannerState {
    match store.read(STATE_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        Ok(None) | Err(_) => PlannerState::default(),
    }
}

/// Serialize the whole state and write it back under [`STATE_KEY`].
pub fn save_state(store: &impl KeyValueStore, state: &PlannerState) -> PlannerResult<()> {
    let raw = serde_json::to_string(state)
        .map_err(|e| PlannerError::Serialization(e.to_string()))?;
    store.write(STATE_KEY, &raw)
}
