//! Monthly payroll engine with leave-quota and weekly-hours deductions.
//!
//! This crate computes an employee's net monthly pay from their base salary,
//! deducting leave days taken beyond the annual quota and hours worked below
//! the weekly target. Attendance is read through the [`store::AttendanceStore`]
//! trait; the [`api`] module serves the calculation over HTTP alongside
//! in-memory employee and attendance stores.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
