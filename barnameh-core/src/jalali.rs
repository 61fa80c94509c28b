//! Jalali (Persian solar) calendar arithmetic and formatting.
//!
//! Events are stored under Gregorian keys; everything the user sees is
//! Jalali. Conversion is a closed-form day-count calculation, so no
//! calendar crate is needed. Month boundaries are found by stepping one
//! Gregorian day at a time and asking the conversion which Jalali month
//! the candidate lands in; a Jalali month is never longer than 31 days,
//! so the walk is bounded.

use chrono::{Datelike, Duration, NaiveDate};

/// Jalali month names in Persian script.
pub const JALALI_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Weekday names in Persian script, Saturday first (the Persian week
/// starts on Saturday).
pub const WEEKDAYS: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Cumulative day count at the start of each Gregorian month (non-leap).
const GREGORIAN_MONTH_DAYS: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A date in the Jalali calendar. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// Convert a Gregorian date to its Jalali equivalent.
    pub fn from_gregorian(date: NaiveDate) -> JalaliDate {
        let gy = date.year();
        let gm = date.month() as i32;
        let gd = date.day() as i32;

        // Day count since the epoch shared by both calendars, with the
        // Gregorian leap day accounted for from March onward.
        let leap_base = if gm > 2 { gy + 1 } else { gy };
        let mut days = 355_666
            + 365 * gy
            + (leap_base + 3) / 4
            - (leap_base + 99) / 100
            + (leap_base + 399) / 400
            + gd
            + GREGORIAN_MONTH_DAYS[(gm - 1) as usize];

        // 12053 days = one 33-year Jalali cycle, 1461 = one 4-year leap block.
        let mut year = -1595 + 33 * (days / 12_053);
        days %= 12_053;
        year += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            year += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        // The first six Jalali months have 31 days, the rest 30; a short
        // Esfand falls out of the day count on its own.
        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        JalaliDate {
            year,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Persian long name of this date's month.
    pub fn month_name(&self) -> &'static str {
        JALALI_MONTHS[(self.month - 1) as usize]
    }
}

/// Numeral strings for a date's Jalali components: `month` and `day` are
/// zero-padded to two digits, `year` is unpadded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JalaliParts {
    pub year: String,
    pub month: String,
    pub day: String,
}

/// Display parts of the date's Jalali form, e.g. 1403/05/20.
pub fn jalali_parts(date: NaiveDate) -> JalaliParts {
    let jalali = JalaliDate::from_gregorian(date);
    JalaliParts {
        year: jalali.year.to_string(),
        month: format!("{:02}", jalali.month),
        day: format!("{:02}", jalali.day),
    }
}

/// Persian long month name for the date's Jalali month.
pub fn jalali_month_name(date: NaiveDate) -> &'static str {
    JalaliDate::from_gregorian(date).month_name()
}

/// Jalali year of the date as a numeral string.
pub fn jalali_year(date: NaiveDate) -> String {
    JalaliDate::from_gregorian(date).year.to_string()
}

/// Persian weekday name for the date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[saturday_offset(date) as usize]
}

/// Map ASCII digits to Persian numerals; non-digits pass through unchanged.
pub fn to_persian_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                PERSIAN_DIGITS[(c as u8 - b'0') as usize]
            } else {
                c
            }
        })
        .collect()
}

/// The Gregorian span of one Jalali month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// First and last Gregorian dates sharing `date`'s Jalali month.
///
/// Steps one day at a time instead of reimplementing Jalali intercalation:
/// month membership is delegated to the conversion, and 32 steps bound the
/// walk in each direction with margin over the longest month.
pub fn month_range(date: NaiveDate) -> MonthRange {
    let target = JalaliDate::from_gregorian(date).month;

    let mut start = date;
    for _ in 0..32 {
        let prev = start - Duration::days(1);
        if JalaliDate::from_gregorian(prev).month != target {
            break;
        }
        start = prev;
    }

    let mut end = date;
    for _ in 0..32 {
        let next = end + Duration::days(1);
        if JalaliDate::from_gregorian(next).month != target {
            break;
        }
        end = next;
    }

    MonthRange { start, end }
}

/// The Saturday-start week containing `date`, in chronological order.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let start = date - Duration::days(i64::from(saturday_offset(date)));
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Days back from `date` to the most recent Saturday. Sunday has host
/// weekday index 0, so the offset from Saturday is `(index + 1) % 7`.
pub(crate) fn saturday_offset(date: NaiveDate) -> u32 {
    (date.weekday().num_days_from_sunday() + 1) % 7
}
