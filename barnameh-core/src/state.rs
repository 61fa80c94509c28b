//! The planner's event store: a flat map from date key to day events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::event::{CalendarEvent, EventDraft};

/// All stored events, keyed by Gregorian date.
///
/// One controller owns the state; mutations happen in place and the caller
/// persists at the boundary after each successful transformation. The sorted
/// map keeps the serialized document deterministic.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlannerState {
    days: BTreeMap<DateKey, Vec<CalendarEvent>>,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new event to the day's list, creating the list if absent,
    /// and return the stored event.
    ///
    /// Title validation is the submitting boundary's job; the store accepts
    /// any draft.
    pub fn add_event(&mut self, key: &DateKey, draft: EventDraft) -> &CalendarEvent {
        let events = self.days.entry(key.clone()).or_default();
        events.push(CalendarEvent::new(draft));
        &events[events.len() - 1]
    }

    /// Flip completion on the matching event. An unknown id is a no-op;
    /// returns whether anything changed.
    pub fn toggle_complete(&mut self, key: &DateKey, event_id: &str) -> bool {
        let Some(events) = self.days.get_mut(key) else {
            return false;
        };
        match events.iter_mut().find(|e| e.id == event_id) {
            Some(event) => {
                event.is_completed = !event.is_completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching event, preserving the order of the rest. An
    /// unknown id is a no-op; returns whether anything was removed.
    ///
    /// A day emptied by a delete keeps its (now empty) list under the key;
    /// read paths make the difference unobservable.
    pub fn delete_event(&mut self, key: &DateKey, event_id: &str) -> bool {
        let Some(events) = self.days.get_mut(key) else {
            return false;
        };
        let before = events.len();
        events.retain(|e| e.id != event_id);
        events.len() != before
    }

    /// The day's events in insertion order, or an empty slice. Reads never
    /// insert anything into the map.
    pub fn events_for_date(&self, key: &DateKey) -> &[CalendarEvent] {
        self.days.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the day has at least one event.
    pub fn has_events(&self, key: &DateKey) -> bool {
        !self.events_for_date(key).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use chrono::NaiveDate;

    fn date_key(y: i32, m: u32, d: u32) -> DateKey {
        DateKey::from(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn draft(title: &str, hour: u32) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            kind: EventType::Normal,
            hour,
            description: None,
        }
    }

    #[test]
    fn test_add_then_read_back() {
        let mut state = PlannerState::new();
        let key = date_key(2024, 3, 20);

        let id = state.add_event(&key, draft("Math", 9)).id.clone();

        let events = state.events_for_date(&key);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, id);
        assert_eq!(events[0].title, "Math");
        assert!(!events[0].is_completed);
    }

    #[test]
    fn test_read_miss_is_empty_and_does_not_insert() {
        let state = PlannerState::new();
        assert!(state.events_for_date(&date_key(2024, 3, 20)).is_empty());
        assert!(state.is_empty());
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            "{}",
            "A read must not create an entry under the key"
        );
    }

    #[test]
    fn test_toggle_twice_restores_original_state() {
        let mut state = PlannerState::new();
        let key = date_key(2024, 3, 20);
        let id = state.add_event(&key, draft("Math", 9)).id.clone();

        assert!(state.toggle_complete(&key, &id));
        assert!(state.events_for_date(&key)[0].is_completed);

        assert!(state.toggle_complete(&key, &id));
        assert!(!state.events_for_date(&key)[0].is_completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_noop() {
        let mut state = PlannerState::new();
        let key = date_key(2024, 3, 20);
        state.add_event(&key, draft("Math", 9));

        assert!(!state.toggle_complete(&key, "no-such-id"));
        assert!(!state.toggle_complete(&date_key(2024, 3, 21), "no-such-id"));
        assert!(!state.events_for_date(&key)[0].is_completed);
    }

    #[test]
    fn test_delete_removes_only_the_match() {
        let mut state = PlannerState::new();
        let key = date_key(2024, 3, 20);
        let first = state.add_event(&key, draft("First", 8)).id.clone();
        let second = state.add_event(&key, draft("Second", 9)).id.clone();
        let third = state.add_event(&key, draft("Third", 9)).id.clone();

        assert!(state.delete_event(&key, &second));

        let remaining: Vec<_> = state
            .events_for_date(&key)
            .iter()
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(remaining, vec![first, third], "Order of the rest is kept");
        assert!(!state.delete_event(&key, &second), "Second delete is a no-op");
    }

    #[test]
    fn test_deleting_last_event_keeps_the_day_key() {
        let mut state = PlannerState::new();
        let key = date_key(2024, 3, 20);
        let id = state.add_event(&key, draft("Only", 9)).id.clone();

        state.delete_event(&key, &id);

        assert!(state.events_for_date(&key).is_empty());
        assert!(state.is_empty());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["2024-03-20"], serde_json::json!([]));
    }

    #[test]
    fn test_days_serialize_in_chronological_order() {
        let mut state = PlannerState::new();
        state.add_event(&date_key(2024, 10, 1), draft("Later", 9));
        state.add_event(&date_key(2024, 9, 30), draft("Earlier", 9));

        let json = serde_json::to_string(&state).unwrap();
        let earlier = json.find("2024-09-30").unwrap();
        let later = json.find("2024-10-01").unwrap();
        assert!(earlier < later);
    }
}
