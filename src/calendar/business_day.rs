//! Business-day arithmetic over the public holiday calendar.
//!
//! A business day is a Monday to Friday that is not a public holiday
//! (observed Mondays included). Every function here is pure and recomputes
//! the holiday list it needs.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{LeaveError, LeaveResult};

use super::holidays::is_public_holiday;

/// Returns true if `date` is a working day.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::is_business_day;
/// use chrono::NaiveDate;
///
/// // Friday 18 July 2025
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2025, 7, 18).unwrap()));
/// // Saturday 19 July 2025
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2025, 7, 19).unwrap()));
/// // Heritage Day, Wednesday 24 September 2025
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2025, 9, 24).unwrap()));
/// ```
pub fn is_business_day(date: NaiveDate) -> bool {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    !is_public_holiday(date)
}

/// Returns the first business day strictly after `date`.
///
/// Saturates at the last representable date.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    std::iter::successors(date.succ_opt(), |day| day.succ_opt())
        .find(|day| is_business_day(*day))
        .unwrap_or(NaiveDate::MAX)
}

/// Returns the last business day strictly before `date`.
///
/// Saturates at the first representable date.
pub fn previous_business_day(date: NaiveDate) -> NaiveDate {
    std::iter::successors(date.pred_opt(), |day| day.pred_opt())
        .find(|day| is_business_day(*day))
        .unwrap_or(NaiveDate::MIN)
}

/// Iterates the days of `[start, end]`; empty when `start > end`.
fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Counts the business days in `[start, end]`.
///
/// # Errors
///
/// Returns [`LeaveError::InvalidRange`] if `start` is after `end`.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::business_days_count;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
/// assert_eq!(business_days_count(monday, friday)?, 5);
/// assert!(business_days_count(friday, monday).is_err());
/// # Ok::<(), leave_engine::error::LeaveError>(())
/// ```
pub fn business_days_count(start: NaiveDate, end: NaiveDate) -> LeaveResult<usize> {
    if start > end {
        return Err(LeaveError::InvalidRange { start, end });
    }

    Ok(days_inclusive(start, end)
        .filter(|day| is_business_day(*day))
        .count())
}

/// Lists the weekend days and public holidays in `[start, end]`, ascending.
///
/// Unlike [`business_days_count`], an inverted range is not an error: it
/// simply contains no days.
pub fn non_business_days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    days_inclusive(start, end)
        .filter(|day| !is_business_day(*day))
        .collect()
}

/// Returns true if a leave request may start on `start` and end on `end`.
///
/// Both endpoints must be business days and the range must contain at
/// least one business day. An inverted range is never valid.
pub fn is_date_range_valid_for_leave(start: NaiveDate, end: NaiveDate) -> bool {
    if !is_business_day(start) || !is_business_day(end) {
        return false;
    }

    matches!(business_days_count(start, end), Ok(count) if count > 0)
}

/// Moves `start` forward and `end` backward onto business days.
///
/// Each endpoint is adjusted independently. The adjusted start may end up
/// after the adjusted end when the range holds no business day.
pub fn adjust_dates_to_business_days(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    let adjusted_start = if is_business_day(start) {
        start
    } else {
        next_business_day(start)
    };

    let adjusted_end = if is_business_day(end) {
        end
    } else {
        previous_business_day(end)
    };

    (adjusted_start, adjusted_end)
}
