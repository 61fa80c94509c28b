//! Canonical Gregorian date keys.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A canonical `YYYY-MM-DD` Gregorian date string, the sole indexing key
/// for stored events.
///
/// Two dates are the same planner day iff their keys are equal. The zero
/// padding makes lexicographic order match chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_iso_date_truncation() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(DateKey::from(date).as_str(), "2024-03-20");
    }

    #[test]
    fn test_single_digit_components_are_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(DateKey::from(date).as_str(), "2025-01-05");
    }

    #[test]
    fn test_order_matches_chronology() {
        let earlier = DateKey::from(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap());
        let later = DateKey::from(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
        assert!(earlier < later);
    }
}
