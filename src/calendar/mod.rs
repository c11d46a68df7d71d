//! Business-day calendar for South African leave.
//!
//! This module computes the public holidays of any year (including the
//! Easter-based holidays and Sunday-to-Monday observed shifts), decides
//! whether a date is a business day, and aggregates over date ranges:
//! counts, next/previous business day, non-business days and leave-range
//! validation.
//!
//! All functions are pure. Holiday lists are recomputed on every call;
//! callers that query one year repeatedly may keep the result themselves.

mod business_day;
mod easter;
mod holidays;
mod range_validation;

pub use business_day::{
    adjust_dates_to_business_days, business_days_count, is_business_day,
    is_date_range_valid_for_leave, next_business_day, non_business_days_in_range,
    previous_business_day,
};
pub use easter::easter_sunday;
pub use holidays::{
    FIXED_HOLIDAYS, FixedHoliday, is_public_holiday, public_holidays, public_holidays_in_range,
};
pub use range_validation::{
    DateRangeValidation, END_NOT_BUSINESS_DAY_MESSAGE, INVERTED_RANGE_MESSAGE,
    NO_BUSINESS_DAYS_MESSAGE, PublicHolidayInRange, START_NOT_BUSINESS_DAY_MESSAGE,
    validate_date_range,
};
