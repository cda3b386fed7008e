//! Request types for the payroll API.
//!
//! Request bodies deserialize straight into [`NewEmployee`] and
//! [`NewAttendanceRecord`]; this module holds the query-string types.
//!
//! [`NewEmployee`]: crate::models::NewEmployee
//! [`NewAttendanceRecord`]: crate::models::NewAttendanceRecord

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::PayMonth;

/// Query parameters selecting a pay month, e.g. `?month=3&year=2026`.
///
/// Either parameter may be left out, in which case the current month or
/// year is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// Month number (1-12).
    #[serde(default)]
    pub month: Option<u32>,
    /// Calendar year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl PeriodQuery {
    /// Resolves the query to a pay month, filling gaps from `today`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
    /// if the resulting month and year do not form a calendar month.
    pub fn resolve(&self, today: NaiveDate) -> EngineResult<PayMonth> {
        PayMonth::new(
            self.month.unwrap_or_else(|| today.month()),
            self.year.unwrap_or_else(|| today.year()),
        )
    }
}

/// Query parameters selecting a calendar year, e.g. `?year=2026`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearQuery {
    /// Calendar year; defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl YearQuery {
    /// Resolves the year, defaulting to that of `today`.
    pub fn resolve(&self, today: NaiveDate) -> i32 {
        self.year.unwrap_or_else(|| today.year())
    }
}

/// Query parameters for the employee listing, e.g. `?q=sharma`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeSearchQuery {
    /// Case-insensitive substring of a name or code.
    #[serde(default)]
    pub q: Option<String>,
}
