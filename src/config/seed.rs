//! Loading seed data into the stores.

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::NewAttendanceRecord;
use crate::store::{EmployeeDirectory, InMemoryAttendanceStore};

use super::types::SeedData;

impl SeedData {
    /// Registers the seed employees and inserts their attendance.
    ///
    /// Seeding goes through the same checks as the HTTP API, so a seed file
    /// with a duplicate code, a duplicate employee and date, or a negative
    /// salary is rejected.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInput`] or [`EngineError::DuplicateRecord`]
    ///   from the stores
    /// - [`EngineError::NotFound`] if an attendance row names an unknown
    ///   employee code
    pub fn apply(
        &self,
        directory: &mut EmployeeDirectory,
        attendance: &mut InMemoryAttendanceStore,
    ) -> EngineResult<()> {
        for employee in &self.employees {
            directory.insert(employee.clone())?;
        }

        for row in &self.attendance {
            let employee_id = directory
                .find_by_code(&row.emp_code)
                .map(|e| e.id)
                .ok_or_else(|| EngineError::not_found("Employee code", &row.emp_code))?;

            attendance.insert(NewAttendanceRecord {
                employee_id,
                date: row.date,
                check_in: row.check_in,
                check_out: row.check_out,
                status: row.status,
                remarks: row.remarks.clone(),
            })?;
        }

        info!(
            employees = self.employees.len(),
            attendance_records = self.attendance.len(),
            "Seed data loaded"
        );
        Ok(())
    }
}
