//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct, the [`NewEmployee`] payload
//! used to register one, and the [`EmploymentStatus`] enum.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifier assigned to an employee by the directory.
pub type EmployeeId = u64;

/// Represents whether an employee is currently on the books.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently employed.
    #[default]
    Active,
    /// No longer employed, kept for history.
    Inactive,
}

/// Represents an employee whose payroll can be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Human-facing employee code (e.g., "EMP-001"), unique per directory.
    pub emp_code: String,
    /// Full name.
    pub name: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title.
    #[serde(default)]
    pub designation: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// The date the employee joined.
    #[serde(default)]
    pub date_of_joining: Option<NaiveDate>,
    /// Bank the salary is paid into.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Account number at that bank.
    #[serde(default)]
    pub bank_account: Option<String>,
    /// IFSC code of the bank branch.
    #[serde(default)]
    pub bank_ifsc: Option<String>,
    /// Current employment status.
    #[serde(default)]
    pub status: EmploymentStatus,
    /// Base monthly salary, covering a nominal 30-day month.
    pub base_salary: Decimal,
}

/// The data needed to register an employee; the directory assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Human-facing employee code (e.g., "EMP-001").
    pub emp_code: String,
    /// Full name.
    pub name: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title.
    #[serde(default)]
    pub designation: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// The date the employee joined.
    #[serde(default)]
    pub date_of_joining: Option<NaiveDate>,
    /// Bank the salary is paid into.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Account number at that bank.
    #[serde(default)]
    pub bank_account: Option<String>,
    /// IFSC code of the bank branch.
    #[serde(default)]
    pub bank_ifsc: Option<String>,
    /// Current employment status.
    #[serde(default)]
    pub status: EmploymentStatus,
    /// Base monthly salary. Defaults to zero when omitted.
    #[serde(default)]
    pub base_salary: Decimal,
}

impl NewEmployee {
    /// Checks the fields the payroll calculation and the directory rely on.
    ///
    /// Code and name must be non-blank and the salary must not be negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.emp_code.trim().is_empty() {
            return Err(EngineError::invalid_input("emp_code", "must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(EngineError::invalid_input("name", "must not be empty"));
        }
        validate_salary(self.base_salary)
    }

    /// Builds the stored employee once an id has been assigned.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            emp_code: self.emp_code.trim().to_string(),
            name: self.name.trim().to_string(),
            department: self.department,
            designation: self.designation,
            email: self.email,
            phone: self.phone,
            date_of_joining: self.date_of_joining,
            bank_name: self.bank_name,
            bank_account: self.bank_account,
            bank_ifsc: self.bank_ifsc,
            status: self.status,
            base_salary: self.base_salary,
        }
    }
}

/// Largest accepted monthly salary (one trillion).
///
/// Keeps a month's deductions and the payroll list total inside `Decimal` range.
pub const MAX_BASE_SALARY: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Rejects negative salaries and salaries above [`MAX_BASE_SALARY`].
pub(crate) fn validate_salary(base_salary: Decimal) -> EngineResult<()> {
    if base_salary < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "base_salary",
            format!("must not be negative, got {}", base_salary),
        ));
    }
    if base_salary > MAX_BASE_SALARY {
        return Err(EngineError::invalid_input(
            "base_salary",
            format!("must not exceed {}, got {}", MAX_BASE_SALARY, base_salary),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn new_employee(code: &str, name: &str, salary: &str) -> NewEmployee {
        NewEmployee {
            emp_code: code.to_string(),
            name: name.to_string(),
            department: Some("Sales".to_string()),
            designation: None,
            email: None,
            phone: None,
            date_of_joining: NaiveDate::from_ymd_opt(2021, 9, 5),
            bank_name: None,
            bank_account: None,
            bank_ifsc: None,
            status: EmploymentStatus::Active,
            base_salary: dec(salary),
        }
    }

    #[test]
    fn test_deserialize_minimal_new_employee() {
        let json = r#"{ "emp_code": "EMP-002", "name": "Aditya Verma" }"#;

        let employee: NewEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.emp_code, "EMP-002");
        assert_eq!(employee.status, EmploymentStatus::Active);
        assert_eq!(employee.base_salary, Decimal::ZERO);
        assert!(employee.department.is_none());
        assert!(employee.bank_name.is_none());
    }

    #[test]
    fn test_bank_details_carried_into_employee() {
        let json = r#"{
            "emp_code": "EMP-001",
            "name": "Riya Sharma",
            "base_salary": "60000",
            "bank_name": "HDFC Bank",
            "bank_account": "50100234567890",
            "bank_ifsc": "HDFC0001234"
        }"#;

        let employee = serde_json::from_str::<NewEmployee>(json)
            .unwrap()
            .into_employee(1);
        assert_eq!(employee.bank_name.as_deref(), Some("HDFC Bank"));
        assert_eq!(employee.bank_account.as_deref(), Some("50100234567890"));
        assert_eq!(employee.bank_ifsc.as_deref(), Some("HDFC0001234"));
    }

    #[test]
    fn test_deserialize_salary_from_string() {
        let json = r#"{
            "emp_code": "EMP-001",
            "name": "Riya Sharma",
            "date_of_joining": "2022-01-10",
            "status": "inactive",
            "base_salary": "60000.00"
        }"#;

        let employee: NewEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.base_salary, dec("60000"));
        assert_eq!(employee.status, EmploymentStatus::Inactive);
        assert_eq!(
            employee.date_of_joining,
            NaiveDate::from_ymd_opt(2022, 1, 10)
        );
    }

    #[test]
    fn test_validate_accepts_zero_salary() {
        assert!(new_employee("EMP-001", "Riya", "0").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_salary() {
        let result = new_employee("EMP-001", "Riya", "-1").validate();
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_bound() {
        assert_eq!(MAX_BASE_SALARY, dec("1000000000000"));
        assert!(validate_salary(MAX_BASE_SALARY).is_ok());
        assert!(matches!(
            validate_salary(MAX_BASE_SALARY + Decimal::new(1, 2)),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "base_salary"
        ));
        assert!(matches!(
            validate_salary(Decimal::MAX),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "base_salary"
        ));
    }

    #[test]
    fn test_validate_rejects_blank_code_and_name() {
        assert!(matches!(
            new_employee("  ", "Riya", "100").validate(),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "emp_code"
        ));
        assert!(matches!(
            new_employee("EMP-001", "", "100").validate(),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_into_employee_trims_code_and_name() {
        let employee = new_employee(" EMP-009 ", " Riya Sharma ", "45000").into_employee(9);
        assert_eq!(employee.id, 9);
        assert_eq!(employee.emp_code, "EMP-009");
        assert_eq!(employee.name, "Riya Sharma");
        assert_eq!(employee.base_salary, dec("45000"));
    }

    #[test]
    fn test_employment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }
}
