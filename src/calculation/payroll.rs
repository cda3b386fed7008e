//! Monthly payroll computation.
//!
//! Combines annual leave accounting and weekly-hours shortfall accounting
//! into a single [`PayrollResult`] for one employee and pay month.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AttendanceStatus, AuditStep, Employee, PayMonth, PayrollResult, validate_salary};
use crate::store::AttendanceStore;

use super::leave::calculate_leave_accounting;
use super::weekly_hours::calculate_weekly_shortfall;

/// Computes an employee's payroll for the given month and year.
///
/// Reads the employee's leave records for the whole year and all their
/// records for the month through `store`, then applies leave accounting
/// and weekly-hours accounting. Net pay never drops below zero.
///
/// # Errors
///
/// - [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
///   if `month` and `year` do not form a calendar month
/// - [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
///   if the employee's salary is negative
/// - any error returned by the store
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::models::{Employee, EmploymentStatus};
/// use payroll_engine::store::InMemoryAttendanceStore;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     emp_code: "EMP-001".to_string(),
///     name: "Riya Sharma".to_string(),
///     department: None,
///     designation: None,
///     email: None,
///     phone: None,
///     date_of_joining: None,
///     bank_name: None,
///     bank_account: None,
///     bank_ifsc: None,
///     status: EmploymentStatus::Active,
///     base_salary: Decimal::from(60000),
/// };
///
/// let store = InMemoryAttendanceStore::new();
/// let result = compute_payroll(&employee, 3, 2026, &store).unwrap();
///
/// assert_eq!(result.net_pay, Decimal::from(60000));
/// assert_eq!(result.remaining_leaves, 25);
/// ```
pub fn compute_payroll<S>(
    employee: &Employee,
    month: u32,
    year: i32,
    store: &S,
) -> EngineResult<PayrollResult>
where
    S: AttendanceStore + ?Sized,
{
    let pay_month = PayMonth::new(month, year)?;
    compute_payroll_for_month(employee, pay_month, store)
}

/// Computes an employee's payroll for an already validated pay month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// for a negative salary, or any error returned by the store.
pub fn compute_payroll_for_month<S>(
    employee: &Employee,
    pay_month: PayMonth,
    store: &S,
) -> EngineResult<PayrollResult>
where
    S: AttendanceStore + ?Sized,
{
    validate_salary(employee.base_salary)?;
    let base_salary = employee.base_salary;

    let year_leaves = store.query_by_employee_status_and_date_range(
        employee.id,
        AttendanceStatus::Leave,
        pay_month.year_start(),
        pay_month.year_end(),
    )?;
    let month_records = store.query_by_employee_and_date_range(
        employee.id,
        pay_month.first_day(),
        pay_month.last_day(),
    )?;

    let mut audit_steps: Vec<AuditStep> = Vec::with_capacity(3);
    let mut step_number: u32 = 1;

    let leave = calculate_leave_accounting(&year_leaves, &pay_month, base_salary, step_number);
    audit_steps.push(leave.audit_step);
    step_number += 1;

    let hours = calculate_weekly_shortfall(&month_records, &pay_month, base_salary, step_number);
    audit_steps.push(hours.audit_step);
    step_number += 1;

    let gross_deductions = leave.extra_leave_deduction + hours.hours_deduction;
    let net_pay = (base_salary - gross_deductions).max(Decimal::ZERO);

    let reasoning = if net_pay.is_zero() && gross_deductions > base_salary {
        format!(
            "Deductions ${} exceed base salary ${}; net pay floored at $0",
            gross_deductions.round_dp(2).normalize(),
            base_salary.normalize()
        )
    } else {
        format!(
            "${} - ${} leave - ${} hours = ${}",
            base_salary.normalize(),
            leave.extra_leave_deduction.round_dp(2).normalize(),
            hours.hours_deduction.round_dp(2).normalize(),
            net_pay.round_dp(2).normalize()
        )
    };

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "extra_leave_deduction": leave.extra_leave_deduction.normalize().to_string(),
            "hours_deduction": hours.hours_deduction.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.normalize().to_string()
        }),
        reasoning,
    });

    debug!(
        employee_id = employee.id,
        year = pay_month.year(),
        month = pay_month.month(),
        leave_records = year_leaves.len(),
        month_records = month_records.len(),
        net_pay = %net_pay,
        "Payroll computed"
    );

    Ok(PayrollResult {
        employee_id: employee.id,
        emp_code: employee.emp_code.clone(),
        employee_name: employee.name.clone(),
        pay_month,
        base_salary,
        unpaid_leaves_in_month: leave.unpaid_leaves_in_month,
        daily_rate: leave.daily_rate,
        extra_leave_deduction: leave.extra_leave_deduction,
        total_leaves_used: leave.total_leaves_used,
        remaining_leaves: leave.remaining_leaves,
        weekly_hours: hours.weekly_hours,
        total_shortfall_hours: hours.total_shortfall_hours.round_dp(2),
        hourly_rate: hours.hourly_rate,
        hours_deduction: hours.hours_deduction,
        net_pay,
        audit_steps,
    })
}
