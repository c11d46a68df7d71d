//! Public holiday model.
//!
//! Holidays are plain values recomputed on every calendar query; nothing
//! here is persisted or cached.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A public holiday on a specific date.
///
/// # Example
///
/// ```
/// use leave_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// // Freedom Day 2025 fell on a Sunday
/// let freedom_day = PublicHoliday::new(NaiveDate::from_ymd_opt(2025, 4, 27).unwrap(), "Freedom Day");
/// let observed = PublicHoliday::observed_for(&freedom_day).unwrap();
///
/// assert_eq!(observed.date, NaiveDate::from_ymd_opt(2025, 4, 28).unwrap());
/// assert_eq!(observed.name, "Public holiday Freedom Day observed");
/// assert!(observed.is_observed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date on which the holiday falls (or is observed).
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Heritage Day").
    pub name: String,
}

impl PublicHoliday {
    /// Creates a holiday with the given date and name.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }

    /// Builds the Monday holiday observed in place of a Sunday holiday.
    ///
    /// Returns `None` only when the following day is outside the supported
    /// date range.
    pub fn observed_for(holiday: &PublicHoliday) -> Option<Self> {
        let date = holiday.date.checked_add_days(Days::new(1))?;
        Some(Self {
            date,
            name: format!("Public holiday {} observed", holiday.name),
        })
    }

    /// Returns true if this entry is a shifted, observed holiday.
    pub fn is_observed(&self) -> bool {
        self.name.contains("observed")
    }
}
