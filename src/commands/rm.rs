use anyhow::Result;

use barnameh_core::DateKey;

use crate::commands;

/// Delete an event from the given day.
pub fn run(event_id: &str, date: Option<&str>) -> Result<()> {
    let date = commands::resolve_date(date)?;
    let (store, mut state) = commands::load()?;
    let key = DateKey::from(date);

    let Some(id) = commands::resolve_event_id(&state, &key, event_id) else {
        println!("No event matching '{}' on {}", event_id, key);
        return Ok(());
    };

    state.delete_event(&key, &id);
    commands::persist(&store, &state)?;

    println!("Deleted #{}", commands::short_id(&id));

    Ok(())
}
