use anyhow::Result;
use chrono::Local;

use barnameh_core::grid::month_grid;
use barnameh_core::jalali::{self, JalaliDate};
use barnameh_core::DateKey;

use crate::commands;

/// Render the Jalali month containing the given date as the 42-cell grid.
/// Today is bracketed, adjacent-month days are parenthesized and days with
/// events carry a dot.
pub fn run(date: Option<&str>) -> Result<()> {
    let date = commands::resolve_date(date)?;
    let (_store, state) = commands::load()?;

    let range = jalali::month_range(date);
    let cells = month_grid(&range);
    let today = Local::now().date_naive();

    println!(
        "{} {}",
        jalali::jalali_month_name(date),
        jalali::to_persian_digits(&jalali::jalali_year(date))
    );
    println!();

    let initials: Vec<String> = jalali::WEEKDAYS
        .iter()
        .map(|name| name.chars().next().unwrap_or(' ').to_string())
        .collect();
    println!("  {}", initials.join("     "));

    for week in cells.chunks(7) {
        let mut line = String::new();
        for cell in week {
            let day = JalaliDate::from_gregorian(cell.date).day;
            let digits = jalali::to_persian_digits(&format!("{:>2}", day));

            let (open, close) = if cell.date == today {
                ('[', ']')
            } else if cell.is_current_month {
                (' ', ' ')
            } else {
                ('(', ')')
            };
            let marker = if state.has_events(&DateKey::from(cell.date)) {
                '•'
            } else {
                ' '
            };

            line.push_str(&format!(" {open}{digits}{close}{marker}"));
        }
        println!("{}", line.trim_end());
    }

    Ok(())
}
