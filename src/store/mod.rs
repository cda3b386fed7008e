//! Record stores for employees and attendance.
//!
//! The payroll calculator reads attendance only through the
//! [`AttendanceStore`] trait, so it works against any backing storage.
//! This module ships in-memory implementations used by the HTTP service,
//! the tests, and the benchmarks.

mod attendance;
mod employees;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceStatus, EmployeeId};

pub use attendance::InMemoryAttendanceStore;
pub use employees::EmployeeDirectory;

/// Read-only query access to attendance records.
///
/// Implementations must return records ordered ascending by date. Both
/// ranges are inclusive of `start` and `end`.
pub trait AttendanceStore {
    /// Returns every record of the employee dated within `start..=end`.
    fn query_by_employee_and_date_range(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Returns the employee's records with the given status dated within
    /// `start..=end`.
    fn query_by_employee_status_and_date_range(
        &self,
        employee_id: EmployeeId,
        status: AttendanceStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let mut records = self.query_by_employee_and_date_range(employee_id, start, end)?;
        records.retain(|r| r.status == status);
        Ok(records)
    }
}

impl<S: AttendanceStore + ?Sized> AttendanceStore for &S {
    fn query_by_employee_and_date_range(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        (**self).query_by_employee_and_date_range(employee_id, start, end)
    }

    fn query_by_employee_status_and_date_range(
        &self,
        employee_id: EmployeeId,
        status: AttendanceStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        (**self).query_by_employee_status_and_date_range(employee_id, status, start, end)
    }
}
