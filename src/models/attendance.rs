//! Attendance record model and related types.
//!
//! This module defines the [`AttendanceRecord`] struct, the payload used to
//! create one, and the [`AttendanceStatus`] enum.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Identifier assigned to an attendance record by the store.
pub type RecordId = u64;

const SECONDS_PER_HOUR: i64 = 3600;

/// The outcome recorded for an employee on a given day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked that day.
    #[default]
    Present,
    /// The employee was absent without taking leave.
    Absent,
    /// The day was taken as leave and counts against the annual quota.
    Leave,
}

/// A single day's attendance for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: RecordId,
    /// The employee the record belongs to.
    pub employee_id: EmployeeId,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// Time the employee checked in, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// Time the employee checked out, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    /// The outcome for the day.
    pub status: AttendanceStatus,
    /// Free-text remark.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// The data needed to create an attendance record; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: EmployeeId,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// Time the employee checked in, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// Time the employee checked out, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    /// The outcome for the day. Defaults to present.
    #[serde(default)]
    pub status: AttendanceStatus,
    /// Free-text remark.
    #[serde(default)]
    pub remarks: Option<String>,
}

impl NewAttendanceRecord {
    /// Builds the stored record once an id has been assigned.
    pub fn into_record(self, id: RecordId) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: self.employee_id,
            date: self.date,
            check_in: self.check_in,
            check_out: self.check_out,
            status: self.status,
            remarks: self
                .remarks
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        }
    }
}

impl AttendanceRecord {
    /// Returns the signed time between check-in and check-out in hours.
    ///
    /// Returns `None` unless both times are recorded. The value is negative
    /// when check-out is earlier than check-in, since both times are taken
    /// on the record's own date.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     id: 1,
    ///     employee_id: 1,
    ///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     check_in: NaiveTime::from_hms_opt(10, 0, 0),
    ///     check_out: NaiveTime::from_hms_opt(18, 30, 0),
    ///     status: AttendanceStatus::Present,
    ///     remarks: None,
    /// };
    /// assert_eq!(record.duration_hours(), Some(Decimal::new(85, 1)));
    /// ```
    pub fn duration_hours(&self) -> Option<Decimal> {
        let (check_in, check_out) = (self.check_in?, self.check_out?);
        let seconds = check_out.signed_duration_since(check_in).num_seconds();
        Some(Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR))
    }

    /// Returns the hours this record contributes towards the weekly target.
    ///
    /// Only present days with both check-in and check-out count. A check-out
    /// earlier than check-in counts as zero hours rather than negative hours,
    /// but the day still counts as a worked day.
    pub fn worked_hours(&self) -> Option<Decimal> {
        if self.status != AttendanceStatus::Present {
            return None;
        }
        self.duration_hours().map(|hours| hours.max(Decimal::ZERO))
    }
}
