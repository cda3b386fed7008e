//! Calculation logic for the payroll engine.
//!
//! This module contains the fixed pay policy, annual leave quota accounting,
//! weekly-hours shortfall accounting, and the monthly payroll computation
//! that combines them.

mod leave;
mod payroll;
mod policy;
mod weekly_hours;

pub use leave::{LeaveAccountingResult, calculate_leave_accounting};
pub use payroll::{compute_payroll, compute_payroll_for_month};
pub use policy::{
    ANNUAL_LEAVE_QUOTA, SALARY_DAYS_PER_MONTH, SALARY_HOURS_PER_MONTH, WEEKLY_HOURS_TARGET,
    daily_rate, hourly_rate,
};
pub use weekly_hours::{WeeklyShortfallResult, calculate_weekly_shortfall};
