use anyhow::Result;

use barnameh_core::{agenda, jalali, DateKey};

use crate::commands;

/// Render the hour-by-hour agenda for one day. Empty hours are skipped
/// unless `all` is set.
pub fn run(date: Option<&str>, all: bool) -> Result<()> {
    let date = commands::resolve_date(date)?;
    let (_store, state) = commands::load()?;
    let key = DateKey::from(date);
    let events = state.events_for_date(&key);

    let parts = jalali::jalali_parts(date);
    println!(
        "{} {} {} {}  ({})",
        jalali::weekday_name(date),
        jalali::to_persian_digits(&parts.day),
        jalali::jalali_month_name(date),
        jalali::to_persian_digits(&parts.year),
        key
    );
    println!();

    if events.is_empty() && !all {
        println!("No events for this day.");
        return Ok(());
    }

    let buckets = agenda::hourly_buckets(events);
    for hour in agenda::HOURS {
        let bucket = &buckets[hour as usize];
        if bucket.is_empty() && !all {
            continue;
        }

        let label = jalali::to_persian_digits(&format!("{:02}:00", hour));
        if bucket.is_empty() {
            println!("{label}");
            continue;
        }

        for event in bucket {
            let check = if event.is_completed { 'x' } else { ' ' };
            let mut line = format!(
                "{label}  [{check}] {} ({})",
                event.title,
                event.kind.label()
            );
            if let Some(description) = &event.description {
                line.push_str(&format!(" - {}", description));
            }
            line.push_str(&format!("  #{}", commands::short_id(&event.id)));
            println!("{line}");
        }
    }

    Ok(())
}
