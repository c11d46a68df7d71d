//! South African public holiday table.
//!
//! Ten holidays fall on fixed dates; Good Friday and Family Day move with
//! Easter. Any holiday landing on a Sunday is also observed on the Monday
//! that follows (Public Holidays Act, section 2(1)).

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::PublicHoliday;

use super::easter::easter_sunday;

/// A holiday that falls on the same month and day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHoliday {
    /// Month of the year (1-12).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
    /// The holiday's name.
    pub name: &'static str,
}

impl FixedHoliday {
    /// Returns this holiday's occurrence in `year`.
    pub fn in_year(&self, year: i32) -> Option<PublicHoliday> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .map(|date| PublicHoliday::new(date, self.name))
    }
}

/// The fixed-date South African public holidays, in calendar order.
pub const FIXED_HOLIDAYS: [FixedHoliday; 10] = [
    FixedHoliday { month: 1, day: 1, name: "New Year's Day" },
    FixedHoliday { month: 3, day: 21, name: "Human Rights Day" },
    FixedHoliday { month: 4, day: 27, name: "Freedom Day" },
    FixedHoliday { month: 5, day: 1, name: "Workers' Day" },
    FixedHoliday { month: 6, day: 16, name: "Youth Day" },
    FixedHoliday { month: 8, day: 9, name: "National Women's Day" },
    FixedHoliday { month: 9, day: 24, name: "Heritage Day" },
    FixedHoliday { month: 12, day: 16, name: "Day of Reconciliation" },
    FixedHoliday { month: 12, day: 25, name: "Christmas Day" },
    FixedHoliday { month: 12, day: 26, name: "Day of Goodwill" },
];

/// Days before Easter Sunday on which Good Friday falls.
const GOOD_FRIDAY_DAYS_BEFORE_EASTER: u64 = 2;

/// Days after Easter Sunday on which Family Day falls.
const FAMILY_DAY_DAYS_AFTER_EASTER: u64 = 1;

/// Returns Good Friday and Family Day for `year`.
fn easter_holidays(year: i32) -> Vec<PublicHoliday> {
    let Some(easter) = easter_sunday(year) else {
        return Vec::new();
    };

    let good_friday = easter
        .checked_sub_days(Days::new(GOOD_FRIDAY_DAYS_BEFORE_EASTER))
        .map(|date| PublicHoliday::new(date, "Good Friday"));
    let family_day = easter
        .checked_add_days(Days::new(FAMILY_DAY_DAYS_AFTER_EASTER))
        .map(|date| PublicHoliday::new(date, "Family Day"));

    good_friday.into_iter().chain(family_day).collect()
}

/// Returns the South African public holidays for `year`, sorted by date.
///
/// The list holds the ten fixed-date holidays, Good Friday and Family Day,
/// plus one "observed" Monday entry for each of those that falls on a
/// Sunday. It is recomputed on every call.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::public_holidays;
/// use chrono::NaiveDate;
///
/// let holidays = public_holidays(2025);
///
/// // Freedom Day 2025 was a Sunday, so it is observed on Monday 28 April
/// assert_eq!(holidays.len(), 13);
/// assert!(holidays.iter().any(|h| {
///     h.date == NaiveDate::from_ymd_opt(2025, 4, 28).unwrap()
///         && h.name == "Public holiday Freedom Day observed"
/// }));
/// ```
pub fn public_holidays(year: i32) -> Vec<PublicHoliday> {
    let fixed = FIXED_HOLIDAYS.iter().filter_map(|holiday| holiday.in_year(year));

    let mut holidays = Vec::with_capacity(FIXED_HOLIDAYS.len() + 4);
    for holiday in fixed.chain(easter_holidays(year)) {
        let observed = if holiday.date.weekday() == Weekday::Sun {
            PublicHoliday::observed_for(&holiday)
        } else {
            None
        };
        holidays.push(holiday);
        holidays.extend(observed);
    }

    // Stable: an observed Monday keeps its place after any same-day original.
    holidays.sort_by_key(|holiday| holiday.date);
    holidays
}

/// Returns true if `date` is a public holiday, including observed Mondays.
pub fn is_public_holiday(date: NaiveDate) -> bool {
    public_holidays(date.year())
        .iter()
        .any(|holiday| holiday.date == date)
}

/// Returns every public holiday falling within `[start, end]`, sorted by date.
///
/// Spans year boundaries. An inverted range yields an empty list.
pub fn public_holidays_in_range(start: NaiveDate, end: NaiveDate) -> Vec<PublicHoliday> {
    if start > end {
        return Vec::new();
    }

    (start.year()..=end.year())
        .flat_map(public_holidays)
        .filter(|holiday| holiday.date >= start && holiday.date <= end)
        .collect()
}
