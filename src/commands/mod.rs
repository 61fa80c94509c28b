pub mod add;
pub mod day;
pub mod done;
pub mod month;
pub mod rm;
pub mod week;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use barnameh_core::{DateKey, PlannerState};

use crate::config::{self, FileStore};

/// Parse an optional YYYY-MM-DD argument, defaulting to today in local
/// time. Everything downstream stays in local time; mixing in UTC-derived
/// dates would shift keys by a day near midnight.
pub fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

/// Open the configured store and load the planner state through it.
pub fn load() -> Result<(FileStore, PlannerState)> {
    let store = config::open_store()?;
    let state = barnameh_core::store::load_state(&store);
    Ok((store, state))
}

/// Persist the whole state back to the store.
pub fn persist(store: &FileStore, state: &PlannerState) -> Result<()> {
    barnameh_core::store::save_state(store, state).context("Failed to save planner data")
}

/// Resolve a full event id or a unique id prefix among the day's events.
pub fn resolve_event_id(state: &PlannerState, key: &DateKey, input: &str) -> Option<String> {
    let events = state.events_for_date(key);

    if let Some(event) = events.iter().find(|e| e.id == input) {
        return Some(event.id.clone());
    }

    let mut matches = events.iter().filter(|e| e.id.starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(event), None) => Some(event.id.clone()),
        _ => None,
    }
}

/// Short id handle shown in listings; enough of a UUID to act on.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
