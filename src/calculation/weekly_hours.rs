//! Weekly-hours shortfall accounting.
//!
//! Hours worked on present days of the pay month are summed per ISO week.
//! Each week that falls short of the weekly target adds its missing hours to
//! the month's shortfall, which is deducted at the hourly rate. Only days
//! inside the pay month count, so weeks straddling a month boundary are
//! measured on their in-month days alone.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AuditStep, PayMonth, WeeklyHours};

use super::policy::{WEEKLY_HOURS_TARGET, hourly_rate};

/// The result of weekly-hours accounting for one pay month.
#[derive(Debug, Clone)]
pub struct WeeklyShortfallResult {
    /// Hours per ISO week that had at least one counted day, ordered by week.
    pub weekly_hours: Vec<WeeklyHours>,
    /// The month's total shortfall, unrounded.
    pub total_shortfall_hours: Decimal,
    /// The hourly rate the deduction is charged at.
    pub hourly_rate: Decimal,
    /// The deduction for the month's shortfall.
    pub hours_deduction: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the weekly-hours shortfall and its deduction for a month.
///
/// # Arguments
///
/// * `month_records` - The employee's attendance records in the pay month
/// * `pay_month` - The month the payroll is for
/// * `base_salary` - The employee's monthly salary
/// * `step_number` - The step number for audit trail sequencing
///
/// Weeks with no present day carrying both check-in and check-out do not
/// appear and contribute no shortfall.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_weekly_shortfall;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, PayMonth};
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
///
/// let march = PayMonth::new(3, 2026).unwrap();
/// let result = calculate_weekly_shortfall(&[record], &march, Decimal::from(45000), 1);
///
/// assert_eq!(result.total_shortfall_hours, Decimal::new(315, 1)); // 31.5
/// assert_eq!(result.hours_deduction, Decimal::new(8859375, 3)); // 8859.375
/// ```
pub fn calculate_weekly_shortfall(
    month_records: &[AttendanceRecord],
    pay_month: &PayMonth,
    base_salary: Decimal,
    step_number: u32,
) -> WeeklyShortfallResult {
    let mut hours_by_week: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();

    for record in month_records.iter().filter(|r| pay_month.contains(r.date)) {
        if let Some(hours) = record.worked_hours() {
            let iso_week = record.date.iso_week();
            *hours_by_week
                .entry((iso_week.year(), iso_week.week()))
                .or_insert(Decimal::ZERO) += hours;
        }
    }

    let weekly_hours: Vec<WeeklyHours> = hours_by_week
        .into_iter()
        .map(|((iso_year, iso_week), hours)| WeeklyHours {
            iso_year,
            iso_week,
            hours,
            shortfall_hours: (WEEKLY_HOURS_TARGET - hours).max(Decimal::ZERO),
        })
        .collect();

    let total_shortfall_hours: Decimal = weekly_hours.iter().map(|w| w.shortfall_hours).sum();
    let rate = hourly_rate(base_salary);
    let hours_deduction = total_shortfall_hours * rate;

    let short_weeks: Vec<String> = weekly_hours
        .iter()
        .filter(|w| w.shortfall_hours > Decimal::ZERO)
        .map(|w| {
            format!(
                "{}-W{:02} worked {}h",
                w.iso_year,
                w.iso_week,
                w.hours.round_dp(2).normalize()
            )
        })
        .collect();

    let reasoning = if short_weeks.is_empty() {
        format!(
            "{} week(s) with recorded hours in {}-{:02}, none below the {}-hour target",
            weekly_hours.len(),
            pay_month.year(),
            pay_month.month(),
            WEEKLY_HOURS_TARGET
        )
    } else {
        format!(
            "{} below the {}-hour target; {}h short × ${} = ${}",
            short_weeks.join(", "),
            WEEKLY_HOURS_TARGET,
            total_shortfall_hours.round_dp(2).normalize(),
            rate.round_dp(2).normalize(),
            hours_deduction.round_dp(2).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_hours_shortfall".to_string(),
        rule_name: "Weekly Hours Shortfall".to_string(),
        input: serde_json::json!({
            "year": pay_month.year(),
            "month": pay_month.month(),
            "records_in_month": month_records.len(),
            "weekly_target_hours": WEEKLY_HOURS_TARGET.to_string(),
            "base_salary": base_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "weeks": weekly_hours.iter().map(|w| serde_json::json!({
                "iso_year": w.iso_year,
                "iso_week": w.iso_week,
                "hours": w.hours.normalize().to_string(),
                "shortfall_hours": w.shortfall_hours.normalize().to_string()
            })).collect::<Vec<_>>(),
            "total_shortfall_hours": total_shortfall_hours.normalize().to_string(),
            "hourly_rate": rate.normalize().to_string(),
            "hours_deduction": hours_deduction.normalize().to_string()
        }),
        reasoning,
    };

    WeeklyShortfallResult {
        weekly_hours,
        total_shortfall_hours,
        hourly_rate: rate,
        hours_deduction,
        audit_step,
    }
}
