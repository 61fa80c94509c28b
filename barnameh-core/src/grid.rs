//! The fixed 42-cell month grid.

use chrono::{Duration, NaiveDate};

use crate::jalali::{saturday_offset, MonthRange};

/// Cells per month view: 6 rows of 7 keep the calendar rectangular for
/// every month length and start weekday.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGridCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// Build the grid for a Jalali month: leading cells pad back to the most
/// recent Saturday, trailing cells fill the remainder from the following
/// month. Chronological order throughout.
pub fn month_grid(range: &MonthRange) -> Vec<MonthGridCell> {
    let leading = saturday_offset(range.start);
    let first = range.start - Duration::days(i64::from(leading));

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = first + Duration::days(offset);
            MonthGridCell {
                date,
                is_current_month: date >= range.start && date <= range.end,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jalali::month_range;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_for_farvardin_1403() {
        // Farvardin 1403: 2024-03-20 (a Wednesday) through 2024-04-19
        let range = month_range(date(2024, 4, 1));
        let cells = month_grid(&range);

        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(cells[0].date, date(2024, 3, 16));
        assert_eq!(cells[41].date, date(2024, 4, 26));
        assert!(!cells[0].is_current_month);
        assert!(cells[4].is_current_month, "2024-03-20 opens the month");

        let current: Vec<_> = cells.iter().filter(|c| c.is_current_month).collect();
        assert_eq!(current.len(), 31);
        assert_eq!(current[0].date, range.start);
        assert_eq!(current[30].date, range.end);
    }

    #[test]
    fn test_grid_is_chronological_and_starts_saturday() {
        for sample in [date(2024, 4, 1), date(2025, 3, 5), date(2026, 3, 10)] {
            let cells = month_grid(&month_range(sample));

            assert_eq!(cells[0].date.weekday(), Weekday::Sat);
            for pair in cells.windows(2) {
                assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
            }
        }
    }

    #[test]
    fn test_current_month_cells_match_month_length() {
        // 31-day, leap 30-day and common 29-day months all fill 42 cells
        for sample in [date(2024, 4, 1), date(2025, 3, 5), date(2026, 3, 10)] {
            let range = month_range(sample);
            let cells = month_grid(&range);

            assert_eq!(cells.len(), GRID_CELLS);
            let current = cells.iter().filter(|c| c.is_current_month).count() as i64;
            assert_eq!(current, (range.end - range.start).num_days() + 1);
        }
    }
}
