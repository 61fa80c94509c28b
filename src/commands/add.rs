use anyhow::Result;

use barnameh_core::{DateKey, EventDraft, EventType};

use crate::commands;

/// Add an event to a day. Invalid submissions (blank title, out-of-range
/// hour) are rejected here, before the store is touched.
pub fn run(
    title: String,
    hour: u32,
    kind: EventType,
    description: Option<String>,
    date: Option<&str>,
) -> Result<()> {
    let title = title.trim().to_string();
    if title.is_empty() {
        anyhow::bail!("Event title must not be empty");
    }
    if hour > 23 {
        anyhow::bail!("Hour must be between 0 and 23, got {}", hour);
    }

    let date = commands::resolve_date(date)?;
    let (store, mut state) = commands::load()?;
    let key = DateKey::from(date);

    let event = state.add_event(
        &key,
        EventDraft {
            title,
            kind,
            hour,
            description,
        },
    );
    let confirmation = format!(
        "Added \"{}\" ({}) at {:02}:00 on {}  #{}",
        event.title,
        event.kind.name(),
        event.hour,
        key,
        commands::short_id(&event.id)
    );

    commands::persist(&store, &state)?;
    println!("{confirmation}");

    Ok(())
}
