//! In-memory employee directory.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeId, NewEmployee};

/// The employees known to the service, with unique employee codes.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: BTreeMap<EmployeeId, Employee>,
    ids_by_code: HashMap<String, EmployeeId>,
    last_id: EmployeeId,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers a new employee, returning it with its id.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInput`] for a blank code or name, or a
    ///   negative salary
    /// - [`EngineError::DuplicateRecord`] if the code is already taken
    pub fn insert(&mut self, new_employee: NewEmployee) -> EngineResult<Employee> {
        new_employee.validate()?;

        let code = new_employee.emp_code.trim();
        if self.ids_by_code.contains_key(code) {
            return Err(EngineError::DuplicateRecord {
                entity: "Employee code".to_string(),
                key: code.to_string(),
            });
        }

        self.last_id += 1;
        let employee = new_employee.into_employee(self.last_id);
        debug!(
            employee_id = employee.id,
            emp_code = %employee.emp_code,
            "Employee registered"
        );

        self.ids_by_code.insert(employee.emp_code.clone(), employee.id);
        self.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    /// Looks up an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if no employee has that id.
    pub fn get(&self, id: EmployeeId) -> EngineResult<&Employee> {
        self.employees
            .get(&id)
            .ok_or_else(|| EngineError::not_found("Employee", id))
    }

    /// Looks up an employee by code.
    pub fn find_by_code(&self, code: &str) -> Option<&Employee> {
        self.ids_by_code
            .get(code.trim())
            .and_then(|id| self.employees.get(id))
    }

    /// Returns all employees, most recently registered first.
    pub fn list_newest_first(&self) -> Vec<&Employee> {
        self.employees.values().rev().collect()
    }

    /// Returns all employees ordered by name.
    pub fn list_by_name(&self) -> Vec<&Employee> {
        let mut employees: Vec<&Employee> = self.employees.values().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        employees
    }

    /// Returns employees whose name or code contains `query`, ignoring case,
    /// most recently registered first. A blank query matches everyone.
    pub fn search(&self, query: &str) -> Vec<&Employee> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list_newest_first();
        }
        self.employees
            .values()
            .rev()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.emp_code.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true when the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
