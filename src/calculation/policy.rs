//! Fixed payroll policy constants and the rates derived from a salary.
//!
//! These values apply to every employee alike and are not configurable.

use rust_decimal::Decimal;

/// Paid leave days per employee per calendar year.
pub const ANNUAL_LEAVE_QUOTA: u32 = 25;

/// Hours an employee is expected to work in each ISO week.
pub const WEEKLY_HOURS_TARGET: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Days a monthly salary is taken to cover.
pub const SALARY_DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Hours a monthly salary is taken to cover (4 weeks of 40 hours).
pub const SALARY_HOURS_PER_MONTH: Decimal = Decimal::from_parts(160, 0, 0, false, 0);

/// Returns the pay for one day: the salary divided by 30.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::daily_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_rate(Decimal::from(30000)), Decimal::from(1000));
/// assert_eq!(daily_rate(Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn daily_rate(base_salary: Decimal) -> Decimal {
    if base_salary.is_zero() {
        return Decimal::ZERO;
    }
    base_salary / SALARY_DAYS_PER_MONTH
}

/// Returns the pay for one hour: the salary divided by 160.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hourly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hourly_rate(Decimal::from(45000)), Decimal::new(28125, 2));
/// ```
pub fn hourly_rate(base_salary: Decimal) -> Decimal {
    if base_salary.is_zero() {
        return Decimal::ZERO;
    }
    base_salary / SALARY_HOURS_PER_MONTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(WEEKLY_HOURS_TARGET, dec("40"));
        assert_eq!(SALARY_DAYS_PER_MONTH, dec("30"));
        assert_eq!(SALARY_HOURS_PER_MONTH, dec("160"));
        assert_eq!(SALARY_HOURS_PER_MONTH, WEEKLY_HOURS_TARGET * Decimal::from(4));
    }

    #[test]
    fn test_daily_rate() {
        assert_eq!(daily_rate(dec("60000")), dec("2000"));
        assert_eq!(daily_rate(dec("45000")), dec("1500"));
    }

    #[test]
    fn test_hourly_rate() {
        assert_eq!(hourly_rate(dec("60000")), dec("375"));
        assert_eq!(hourly_rate(dec("45000")), dec("281.25"));
        assert_eq!(hourly_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_rates_for_uneven_salary_keep_precision() {
        let rate = daily_rate(dec("50000"));
        assert_eq!(rate.round_dp(2), dec("1666.67"));
        assert_eq!((rate * dec("30")).round_dp(10), dec("50000"));
    }
}
