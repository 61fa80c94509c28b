use anyhow::Result;
use chrono::Local;

use barnameh_core::jalali;
use barnameh_core::DateKey;

use crate::commands;

/// Render the Saturday-start week containing the given date: weekday name,
/// Jalali date and the day's event count.
pub fn run(date: Option<&str>) -> Result<()> {
    let date = commands::resolve_date(date)?;
    let (_store, state) = commands::load()?;
    let today = Local::now().date_naive();

    for day in jalali::week_days(date) {
        let key = DateKey::from(day);
        let parts = jalali::jalali_parts(day);
        let count = state.events_for_date(&key).len();

        let marker = if day == today { '*' } else { ' ' };
        let jalali_date = jalali::to_persian_digits(&format!("{}/{}", parts.month, parts.day));
        let count_note = if count > 0 {
            format!("  {} رویداد", jalali::to_persian_digits(&count.to_string()))
        } else {
            String::new()
        };

        println!(
            "{} {:<10} {}{}",
            marker,
            jalali::weekday_name(day),
            jalali_date,
            count_note
        );
    }

    Ok(())
}
