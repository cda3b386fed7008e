//! Property tests for the payroll calculation.

use chrono::{Days, NaiveDate, NaiveTime};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use payroll_engine::calculation::{ANNUAL_LEAVE_QUOTA, compute_payroll};
use payroll_engine::models::{AttendanceStatus, Employee, EmploymentStatus, NewAttendanceRecord};
use payroll_engine::store::InMemoryAttendanceStore;

const YEAR: i32 = 2026;

fn employee(base_salary: Decimal) -> Employee {
    Employee {
        id: 1,
        emp_code: "EMP-001".to_string(),
        name: "Property Employee".to_string(),
        department: None,
        designation: None,
        email: None,
        phone: None,
        date_of_joining: None,
        bank_name: None,
        bank_account: None,
        bank_ifsc: None,
        status: EmploymentStatus::Active,
        base_salary,
    }
}

fn salary() -> impl Strategy<Value = Decimal> {
    (0_i64..20_000_000_i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// (day of year, status, check-in minute, check-out minute)
fn attendance_rows() -> impl Strategy<Value = Vec<(u64, u8, u32, u32)>> {
    prop::collection::vec((0_u64..365, 0_u8..3, 0_u32..1440, 0_u32..1440), 0..120)
}

fn build_store(rows: &[(u64, u8, u32, u32)]) -> InMemoryAttendanceStore {
    let jan_first = NaiveDate::from_ymd_opt(YEAR, 1, 1).unwrap();
    let mut store = InMemoryAttendanceStore::new();
    for &(day, status, check_in, check_out) in rows {
        let status = match status {
            0 => AttendanceStatus::Present,
            1 => AttendanceStatus::Absent,
            _ => AttendanceStatus::Leave,
        };
        // Duplicate dates are rejected by the store; the first one wins.
        let _ = store.insert(NewAttendanceRecord {
            employee_id: 1,
            date: jan_first.checked_add_days(Days::new(day)).unwrap(),
            check_in: NaiveTime::from_hms_opt(check_in / 60, check_in % 60, 0),
            check_out: NaiveTime::from_hms_opt(check_out / 60, check_out % 60, 0),
            status,
            remarks: None,
        });
    }
    store
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn net_pay_is_never_negative_nor_above_base(
        base_salary in salary(),
        rows in attendance_rows(),
        month in 1_u32..=12,
    ) {
        let store = build_store(&rows);
        let result = compute_payroll(&employee(base_salary), month, YEAR, &store).unwrap();

        prop_assert!(result.net_pay >= Decimal::ZERO);
        prop_assert!(result.net_pay <= base_salary);
        prop_assert!(result.hours_deduction >= Decimal::ZERO);
        prop_assert!(result.extra_leave_deduction >= Decimal::ZERO);
        if result.total_deductions() <= base_salary {
            let drift = (result.net_pay + result.total_deductions() - base_salary).abs();
            prop_assert!(drift < Decimal::new(1, 10));
        } else {
            prop_assert_eq!(result.net_pay, Decimal::ZERO);
        }
    }

    #[test]
    fn no_attendance_pays_full_salary(base_salary in salary(), month in 1_u32..=12) {
        let store = InMemoryAttendanceStore::new();
        let result = compute_payroll(&employee(base_salary), month, YEAR, &store).unwrap();

        prop_assert_eq!(result.net_pay, base_salary);
        prop_assert_eq!(result.unpaid_leaves_in_month, 0);
        prop_assert_eq!(result.hours_deduction, Decimal::ZERO);
        prop_assert_eq!(result.remaining_leaves, ANNUAL_LEAVE_QUOTA);
    }

    #[test]
    fn unpaid_leave_across_the_year_matches_overrun(rows in attendance_rows()) {
        let store = build_store(&rows);
        let employee = employee(Decimal::from(30000));

        let mut unpaid_in_year = 0;
        let mut total_leaves_used = None;
        for month in 1..=12 {
            let result = compute_payroll(&employee, month, YEAR, &store).unwrap();
            unpaid_in_year += result.unpaid_leaves_in_month;
            total_leaves_used = Some(result.total_leaves_used);
            prop_assert_eq!(
                result.remaining_leaves,
                ANNUAL_LEAVE_QUOTA.saturating_sub(result.total_leaves_used)
            );
        }

        let used = total_leaves_used.unwrap();
        prop_assert_eq!(unpaid_in_year, used.saturating_sub(ANNUAL_LEAVE_QUOTA));
    }

    #[test]
    fn recomputation_is_identical(
        base_salary in salary(),
        rows in attendance_rows(),
        month in 1_u32..=12,
    ) {
        let store = build_store(&rows);
        let employee = employee(base_salary);

        let first = compute_payroll(&employee, month, YEAR, &store).unwrap();
        let second = compute_payroll(&employee, month, YEAR, &store).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn weekly_shortfall_is_bounded_by_target(rows in attendance_rows(), month in 1_u32..=12) {
        let store = build_store(&rows);
        let result = compute_payroll(&employee(Decimal::from(16000)), month, YEAR, &store).unwrap();

        for week in &result.weekly_hours {
            prop_assert!(week.hours >= Decimal::ZERO);
            prop_assert!(week.shortfall_hours >= Decimal::ZERO);
            prop_assert!(week.shortfall_hours <= Decimal::from(40));
        }
        // At most six ISO weeks can touch one month.
        prop_assert!(result.weekly_hours.len() <= 6);
    }
}
