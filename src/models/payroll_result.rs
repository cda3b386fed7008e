//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures that capture every output of a monthly payroll computation,
//! including the per-week hours breakdown and an audit trail of the rules
//! applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeId, PayMonth};

/// Hours worked in one ISO week, restricted to days inside the pay month.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WeeklyHours;
/// use rust_decimal::Decimal;
///
/// let week = WeeklyHours {
///     iso_year: 2026,
///     iso_week: 10,
///     hours: Decimal::new(85, 1),
///     shortfall_hours: Decimal::new(315, 1),
/// };
/// assert_eq!(week.hours + week.shortfall_hours, Decimal::from(40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    /// The ISO week-numbering year.
    pub iso_year: i32,
    /// The ISO week number (1-53).
    pub iso_week: u32,
    /// Total hours worked in that week within the pay month.
    pub hours: Decimal,
    /// Hours missing to reach the weekly target, zero if it was met.
    pub shortfall_hours: Decimal,
}

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a monthly payroll computation for one employee.
///
/// Derived on every request and never stored. Two computations over the
/// same employee and attendance data produce equal results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The employee the payroll is for.
    pub employee_id: EmployeeId,
    /// The employee's code.
    pub emp_code: String,
    /// The employee's name.
    pub employee_name: String,
    /// The month the payroll covers.
    pub pay_month: PayMonth,
    /// The base monthly salary before deductions.
    pub base_salary: Decimal,
    /// Leave days in this month that fall beyond the annual quota.
    pub unpaid_leaves_in_month: u32,
    /// One thirtieth of the base salary.
    pub daily_rate: Decimal,
    /// Deduction for unpaid leave days in this month.
    pub extra_leave_deduction: Decimal,
    /// Leave days taken in the whole calendar year.
    pub total_leaves_used: u32,
    /// Paid leave days still available in the calendar year.
    pub remaining_leaves: u32,
    /// Hours per ISO week, ordered by week.
    pub weekly_hours: Vec<WeeklyHours>,
    /// Total hours short of the weekly target, rounded to 2 decimal places.
    pub total_shortfall_hours: Decimal,
    /// One hundred-and-sixtieth of the base salary.
    pub hourly_rate: Decimal,
    /// Deduction for the weekly-hours shortfall.
    pub hours_deduction: Decimal,
    /// Base salary less both deductions, never negative.
    pub net_pay: Decimal,
    /// The audit trail of rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl PayrollResult {
    /// Returns the sum of both deductions.
    pub fn total_deductions(&self) -> Decimal {
        self.extra_leave_deduction + self.hours_deduction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> PayrollResult {
        PayrollResult {
            employee_id: 2,
            emp_code: "EMP-002".to_string(),
            employee_name: "Aditya Verma".to_string(),
            pay_month: PayMonth::new(3, 2026).unwrap(),
            base_salary: dec("45000"),
            unpaid_leaves_in_month: 0,
            daily_rate: dec("1500"),
            extra_leave_deduction: dec("0"),
            total_leaves_used: 0,
            remaining_leaves: 25,
            weekly_hours: vec![WeeklyHours {
                iso_year: 2026,
                iso_week: 10,
                hours: dec("8.5"),
                shortfall_hours: dec("31.5"),
            }],
            total_shortfall_hours: dec("31.5"),
            hourly_rate: dec("281.25"),
            hours_deduction: dec("8859.375"),
            net_pay: dec("36140.625"),
            audit_steps: vec![AuditStep {
                step_number: 1,
                rule_id: "weekly_hours_shortfall".to_string(),
                rule_name: "Weekly Hours Shortfall".to_string(),
                input: serde_json::json!({"weeks": 1}),
                output: serde_json::json!({"total_shortfall_hours": "31.5"}),
                reasoning: "Week 2026-W10 worked 8.5 of 40 hours".to_string(),
            }],
        }
    }

    /// PR-001: net pay plus deductions equals base salary
    #[test]
    fn test_net_pay_plus_deductions_equals_base() {
        let result = sample_result();
        assert_eq!(result.net_pay + result.total_deductions(), result.base_salary);
    }

    #[test]
    fn test_payroll_result_serialization() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"employee_id\":2"));
        assert!(json.contains("\"pay_month\":{\"year\":2026,\"month\":3}"));
        assert!(json.contains("\"net_pay\":\"36140.625\""));
        assert!(json.contains("\"hourly_rate\":\"281.25\""));
        assert!(json.contains("\"weekly_hours\":["));
        assert!(json.contains("\"audit_steps\":["));
    }

    #[test]
    fn test_payroll_result_deserialization() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        let result: PayrollResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, sample_result());
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "annual_leave_quota".to_string(),
            rule_name: "Annual Leave Quota".to_string(),
            input: serde_json::json!({"leave_days": 3}),
            output: serde_json::json!({"unpaid": 0}),
            reasoning: "3 of 25 leave days used".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"annual_leave_quota\""));
        assert!(json.contains("\"rule_name\":\"Annual Leave Quota\""));
    }
}
