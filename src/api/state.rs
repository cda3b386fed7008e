//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::SeedData;
use crate::error::EngineResult;
use crate::store::{EmployeeDirectory, InMemoryAttendanceStore};

/// Shared application state.
///
/// Holds the in-memory stores. Read-only handlers take read locks; create
/// and delete handlers take write locks.
#[derive(Clone, Default)]
pub struct AppState {
    employees: Arc<RwLock<EmployeeDirectory>>,
    attendance: Arc<RwLock<InMemoryAttendanceStore>>,
}

impl AppState {
    /// Creates application state with empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates application state with stores filled from seed data.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while seeding.
    pub fn from_seed(seed: &SeedData) -> EngineResult<Self> {
        let mut employees = EmployeeDirectory::new();
        let mut attendance = InMemoryAttendanceStore::new();
        seed.apply(&mut employees, &mut attendance)?;

        Ok(Self {
            employees: Arc::new(RwLock::new(employees)),
            attendance: Arc::new(RwLock::new(attendance)),
        })
    }

    /// Returns the employee directory lock.
    pub fn employees(&self) -> &RwLock<EmployeeDirectory> {
        &self.employees
    }

    /// Returns the attendance store lock.
    pub fn attendance(&self) -> &RwLock<InMemoryAttendanceStore> {
        &self.attendance
    }
}
