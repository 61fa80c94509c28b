use anyhow::Result;

use barnameh_core::DateKey;

use crate::commands;

/// Toggle completion on an event of the given day.
pub fn run(event_id: &str, date: Option<&str>) -> Result<()> {
    let date = commands::resolve_date(date)?;
    let (store, mut state) = commands::load()?;
    let key = DateKey::from(date);

    let Some(id) = commands::resolve_event_id(&state, &key, event_id) else {
        println!("No event matching '{}' on {}", event_id, key);
        return Ok(());
    };

    state.toggle_complete(&key, &id);
    let completed = state
        .events_for_date(&key)
        .iter()
        .find(|e| e.id == id)
        .is_some_and(|e| e.is_completed);
    commands::persist(&store, &state)?;

    if completed {
        println!("Marked done: #{}", commands::short_id(&id));
    } else {
        println!("Marked not done: #{}", commands::short_id(&id));
    }

    Ok(())
}
