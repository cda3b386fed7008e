//! Pay month model.
//!
//! This module contains the [`PayMonth`] type, a validated calendar month
//! that defines the window a payroll is computed for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The serialized shape of a [`PayMonth`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PayMonthParts {
    year: i32,
    month: u32,
}

/// A calendar month that a payroll is computed for.
///
/// A `PayMonth` can only be built from a month/year pair that forms a real
/// calendar month, so the first and last day of the month and of its year
/// are always available.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let march = PayMonth::new(3, 2026).unwrap();
/// assert_eq!(march.first_day(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
/// assert_eq!(march.last_day(), NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
/// assert!(PayMonth::new(13, 2026).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PayMonthParts", into = "PayMonthParts")]
pub struct PayMonth {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
    year_start: NaiveDate,
    year_end: NaiveDate,
}

impl PayMonth {
    /// Builds the pay month for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when the month is outside 1-12
    /// or the year is outside the supported calendar range.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidPeriod { month, year };

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = next_month_start
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;
        let year_start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let year_end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
            year_start,
            year_end,
        })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// January 1st of the month's year.
    pub fn year_start(&self) -> NaiveDate {
        self.year_start
    }

    /// December 31st of the month's year.
    pub fn year_end(&self) -> NaiveDate {
        self.year_end
    }

    /// Checks if a given date falls within this month (inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayMonth;
    /// use chrono::NaiveDate;
    ///
    /// let feb = PayMonth::new(2, 2028).unwrap();
    /// assert!(feb.contains(NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()));
    /// assert!(!feb.contains(NaiveDate::from_ymd_opt(2028, 3, 1).unwrap()));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }
}

impl TryFrom<PayMonthParts> for PayMonth {
    type Error = EngineError;

    fn try_from(parts: PayMonthParts) -> EngineResult<Self> {
        PayMonth::new(parts.month, parts.year)
    }
}

impl From<PayMonth> for PayMonthParts {
    fn from(pay_month: PayMonth) -> Self {
        PayMonthParts {
            year: pay_month.year,
            month: pay_month.month,
        }
    }
}
