//! Annual leave quota accounting.
//!
//! Leave days are consumed against the annual quota in date order. Once the
//! quota is exhausted every further leave day in the year is unpaid, and the
//! unpaid days that fall in the pay month are deducted at the daily rate.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus, AuditStep, PayMonth};

use super::policy::{ANNUAL_LEAVE_QUOTA, daily_rate};

/// The result of leave accounting for one pay month.
#[derive(Debug, Clone)]
pub struct LeaveAccountingResult {
    /// Leave days taken in the whole calendar year.
    pub total_leaves_used: u32,
    /// Unpaid leave days that fall in the pay month.
    pub unpaid_leaves_in_month: u32,
    /// Paid leave days still available in the year.
    pub remaining_leaves: u32,
    /// The daily rate the deduction is charged at.
    pub daily_rate: Decimal,
    /// The deduction for unpaid leave in the pay month.
    pub extra_leave_deduction: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Accounts for the year's leave days against the annual quota.
///
/// # Arguments
///
/// * `year_leaves` - The employee's leave records for the pay month's year,
///   ordered ascending by date
/// * `pay_month` - The month the payroll is for
/// * `base_salary` - The employee's monthly salary
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_leave_accounting;
/// use payroll_engine::models::PayMonth;
/// use rust_decimal::Decimal;
///
/// let march = PayMonth::new(3, 2026).unwrap();
/// let result = calculate_leave_accounting(&[], &march, Decimal::from(30000), 1);
///
/// assert_eq!(result.total_leaves_used, 0);
/// assert_eq!(result.remaining_leaves, 25);
/// assert_eq!(result.extra_leave_deduction, Decimal::ZERO);
/// ```
pub fn calculate_leave_accounting(
    year_leaves: &[AttendanceRecord],
    pay_month: &PayMonth,
    base_salary: Decimal,
    step_number: u32,
) -> LeaveAccountingResult {
    let leave_dates: Vec<_> = year_leaves
        .iter()
        .filter(|r| r.status == AttendanceStatus::Leave)
        .filter(|r| r.date >= pay_month.year_start() && r.date <= pay_month.year_end())
        .map(|r| r.date)
        .collect();

    let total_leaves_used = leave_dates.len() as u32;

    // Positions past the quota are unpaid wherever in the year they fall.
    let unpaid_dates: Vec<_> = leave_dates
        .iter()
        .skip(ANNUAL_LEAVE_QUOTA as usize)
        .filter(|date| pay_month.contains(**date))
        .collect();
    let unpaid_leaves_in_month = unpaid_dates.len() as u32;

    let rate = daily_rate(base_salary);
    let extra_leave_deduction = Decimal::from(unpaid_leaves_in_month) * rate;
    let remaining_leaves = ANNUAL_LEAVE_QUOTA.saturating_sub(total_leaves_used);

    let reasoning = if unpaid_leaves_in_month > 0 {
        format!(
            "{} leave days taken in {} exceed the {}-day quota; {} unpaid in {}-{:02} × ${} = ${}",
            total_leaves_used,
            pay_month.year(),
            ANNUAL_LEAVE_QUOTA,
            unpaid_leaves_in_month,
            pay_month.year(),
            pay_month.month(),
            rate.round_dp(2).normalize(),
            extra_leave_deduction.round_dp(2).normalize()
        )
    } else {
        format!(
            "{} of {} leave days used in {}, no unpaid leave in {}-{:02}",
            total_leaves_used,
            ANNUAL_LEAVE_QUOTA,
            pay_month.year(),
            pay_month.year(),
            pay_month.month()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "annual_leave_quota".to_string(),
        rule_name: "Annual Leave Quota".to_string(),
        input: serde_json::json!({
            "year": pay_month.year(),
            "month": pay_month.month(),
            "leave_days_in_year": total_leaves_used,
            "quota": ANNUAL_LEAVE_QUOTA,
            "base_salary": base_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "unpaid_dates_in_month": unpaid_dates.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
            "unpaid_leaves_in_month": unpaid_leaves_in_month,
            "remaining_leaves": remaining_leaves,
            "daily_rate": rate.normalize().to_string(),
            "extra_leave_deduction": extra_leave_deduction.normalize().to_string()
        }),
        reasoning,
    };

    LeaveAccountingResult {
        total_leaves_used,
        unpaid_leaves_in_month,
        remaining_leaves,
        daily_rate: rate,
        extra_leave_deduction,
        audit_step,
    }
}
