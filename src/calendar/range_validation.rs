//! Leave date-range validation report.
//!
//! Gathers everything a caller needs to explain why a proposed leave range
//! is or is not acceptable: the business-day count, the non-business days
//! and the public holidays it covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PublicHoliday;

use super::business_day::{business_days_count, is_business_day, non_business_days_in_range};
use super::holidays::public_holidays_in_range;

/// Error reported when the range is inverted.
pub const INVERTED_RANGE_MESSAGE: &str = "Start date must be before or equal to end date";
/// Error reported when the start date is not a business day.
pub const START_NOT_BUSINESS_DAY_MESSAGE: &str =
    "Start date must be a business day (Monday-Friday, excluding public holidays)";
/// Error reported when the end date is not a business day.
pub const END_NOT_BUSINESS_DAY_MESSAGE: &str =
    "End date must be a business day (Monday-Friday, excluding public holidays)";
/// Error reported when the range contains no business day.
pub const NO_BUSINESS_DAYS_MESSAGE: &str = "Date range must contain at least one business day";

/// A public holiday as reported for a validated range.
///
/// Carries the observed flag as data so it survives serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHolidayInRange {
    /// The date on which the holiday falls (or is observed).
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// True for a Monday observed in place of a Sunday holiday.
    pub is_observed: bool,
}

impl From<PublicHoliday> for PublicHolidayInRange {
    fn from(holiday: PublicHoliday) -> Self {
        let is_observed = holiday.is_observed();
        Self {
            date: holiday.date,
            name: holiday.name,
            is_observed,
        }
    }
}

/// The outcome of validating a proposed leave range.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRangeValidation {
    /// True when no errors were found.
    pub is_valid: bool,
    /// Human-readable reasons the range was rejected.
    pub errors: Vec<String>,
    /// Weekend days and public holidays inside the range.
    pub non_business_days: Vec<NaiveDate>,
    /// Number of business days inside the range.
    pub business_days_count: usize,
    /// Public holidays (observed ones included) inside the range.
    pub public_holidays_in_range: Vec<PublicHolidayInRange>,
}

/// Validates `[start, end]` as a leave range and reports the details.
///
/// An inverted range reports a single error and nothing else. Otherwise
/// every applicable error is collected.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::validate_date_range;
/// use chrono::NaiveDate;
///
/// let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
/// let report = validate_date_range(date(4, 14), date(4, 25));
///
/// assert!(report.is_valid);
/// assert_eq!(report.business_days_count, 8);
/// assert_eq!(report.public_holidays_in_range.len(), 2);
/// ```
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> DateRangeValidation {
    let mut result = DateRangeValidation {
        is_valid: true,
        ..Default::default()
    };

    if start > end {
        result.is_valid = false;
        result.errors.push(INVERTED_RANGE_MESSAGE.to_string());
        return result;
    }

    if !is_business_day(start) {
        result.is_valid = false;
        result.errors.push(START_NOT_BUSINESS_DAY_MESSAGE.to_string());
    }

    if !is_business_day(end) {
        result.is_valid = false;
        result.errors.push(END_NOT_BUSINESS_DAY_MESSAGE.to_string());
    }

    result.non_business_days = non_business_days_in_range(start, end);
    // The range is ordered here, so counting cannot fail.
    result.business_days_count = business_days_count(start, end).unwrap_or_default();
    result.public_holidays_in_range = public_holidays_in_range(start, end)
        .into_iter()
        .map(PublicHolidayInRange::from)
        .collect();

    if result.business_days_count == 0 {
        result.is_valid = false;
        result.errors.push(NO_BUSINESS_DAYS_MESSAGE.to_string());
    }

    result
}
