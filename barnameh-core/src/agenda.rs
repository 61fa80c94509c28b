//! Hourly partitioning of a day's events for the agenda view.
//!
//! Events are kept in insertion order inside their day; the hour bucketing
//! here is applied at read time, never stored.

use std::ops::Range;

use crate::event::CalendarEvent;

/// The 24 agenda slots of a day.
pub const HOURS: Range<u32> = 0..24;

/// Events assigned to the given hour slot, preserving their relative order.
pub fn events_for_hour<'a>(day_events: &'a [CalendarEvent], hour: u32) -> Vec<&'a CalendarEvent> {
    day_events.iter().filter(|e| e.hour == hour).collect()
}

/// Partition a day's events into their 24 hour buckets in one pass.
pub fn hourly_buckets<'a>(day_events: &'a [CalendarEvent]) -> [Vec<&'a CalendarEvent>; 24] {
    let mut buckets: [Vec<&CalendarEvent>; 24] = std::array::from_fn(|_| Vec::new());
    for event in day_events {
        if let Some(bucket) = buckets.get_mut(event.hour as usize) {
            bucket.push(event);
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, EventType};
    use crate::state::PlannerState;
    use crate::DateKey;
    use chrono::NaiveDate;

    fn event(title: &str, hour: u32) -> CalendarEvent {
        CalendarEvent::new(EventDraft {
            title: title.to_string(),
            kind: EventType::Normal,
            hour,
            description: None,
        })
    }

    #[test]
    fn test_events_for_hour_filters_and_preserves_order() {
        let day = vec![
            event("breakfast", 8),
            event("standup", 9),
            event("review", 9),
            event("dinner", 20),
        ];

        let nine = events_for_hour(&day, 9);
        assert_eq!(nine.len(), 2);
        assert_eq!(nine[0].title, "standup");
        assert_eq!(nine[1].title, "review");
        assert!(events_for_hour(&day, 7).is_empty());
    }

    #[test]
    fn test_buckets_partition_the_day_exactly() {
        let day = vec![
            event("midnight", 0),
            event("standup", 9),
            event("review", 9),
            event("retro", 17),
            event("late", 23),
        ];

        let buckets = hourly_buckets(&day);
        let total: usize = buckets.iter().map(Vec::len).sum();
        assert_eq!(total, day.len(), "Every event lands in exactly one bucket");

        for (hour, bucket) in buckets.iter().enumerate() {
            for event in bucket {
                assert_eq!(event.hour as usize, hour);
            }
        }
    }

    #[test]
    fn test_exam_at_nine_scenario() {
        let mut state = PlannerState::new();
        let key = DateKey::from(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        state.add_event(
            &key,
            EventDraft {
                title: "Math".to_string(),
                kind: EventType::Exam,
                hour: 9,
                description: None,
            },
        );

        let at_nine = events_for_hour(state.events_for_date(&key), 9);
        assert_eq!(at_nine.len(), 1);
        assert_eq!(at_nine[0].title, "Math");
        assert_eq!(at_nine[0].kind, EventType::Exam);
        assert!(!at_nine[0].is_completed);
    }
}
