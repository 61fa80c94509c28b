//! Planner event types.
//!
//! Events are owned by the day bucket they belong to and carry no date of
//! their own; the agenda slot is the `hour` field. Wire field names follow
//! the persisted planner layout (`type`, `isCompleted`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single planner event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Agenda slot, 0 to 23
    pub hour: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl CalendarEvent {
    /// Create an event from a draft with a fresh unique id, not yet completed.
    pub fn new(draft: EventDraft) -> Self {
        CalendarEvent {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            kind: draft.kind,
            hour: draft.hour,
            description: draft.description,
            is_completed: false,
        }
    }
}

/// What a submission provides; the store assigns the id and completion state.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub kind: EventType,
    pub hour: u32,
    pub description: Option<String>,
}

/// Event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Normal,
    Exam,
    Meeting,
    Deadline,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Normal,
        EventType::Exam,
        EventType::Meeting,
        EventType::Deadline,
    ];

    /// ASCII name used on the wire and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            EventType::Normal => "normal",
            EventType::Exam => "exam",
            EventType::Meeting => "meeting",
            EventType::Deadline => "deadline",
        }
    }

    /// Persian display label.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Normal => "معمولی",
            EventType::Exam => "امتحان",
            EventType::Meeting => "جلسه",
            EventType::Deadline => "تحویل پروژه",
        }
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(EventType::Normal),
            "exam" => Ok(EventType::Exam),
            "meeting" => Ok(EventType::Meeting),
            "deadline" => Ok(EventType::Deadline),
            other => Err(format!(
                "Unknown event type '{}'. Expected normal, exam, meeting or deadline",
                other
            )),
        }
    }
}
