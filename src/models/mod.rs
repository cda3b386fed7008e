//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_month;
mod payroll_result;

pub use attendance::{AttendanceRecord, AttendanceStatus, NewAttendanceRecord, RecordId};
pub(crate) use employee::validate_salary;
pub use employee::{Employee, EmployeeId, EmploymentStatus, MAX_BASE_SALARY, NewEmployee};
pub use pay_month::PayMonth;
pub use payroll_result::{AuditStep, PayrollResult, WeeklyHours};
