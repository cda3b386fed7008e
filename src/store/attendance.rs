//! In-memory attendance record store.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, EmployeeId, NewAttendanceRecord, RecordId,
};

use super::AttendanceStore;

/// Attendance records held in memory, keyed by employee and date.
///
/// At most one record exists per employee and date. Records are never
/// updated once inserted; they can only be deleted by id.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceStatus, NewAttendanceRecord};
/// use payroll_engine::store::{AttendanceStore, InMemoryAttendanceStore};
/// use chrono::NaiveDate;
///
/// let mut store = InMemoryAttendanceStore::new();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let record = store
///     .insert(NewAttendanceRecord {
///         employee_id: 1,
///         date,
///         check_in: None,
///         check_out: None,
///         status: AttendanceStatus::Leave,
///         remarks: None,
///     })
///     .unwrap();
///
/// let found = store.query_by_employee_and_date_range(1, date, date).unwrap();
/// assert_eq!(found, vec![record]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceStore {
    records: BTreeMap<(EmployeeId, NaiveDate), AttendanceRecord>,
    keys_by_id: HashMap<RecordId, (EmployeeId, NaiveDate)>,
    last_id: RecordId,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateRecord`] if the employee already has a
    /// record on that date.
    pub fn insert(&mut self, new_record: NewAttendanceRecord) -> EngineResult<AttendanceRecord> {
        let key = (new_record.employee_id, new_record.date);
        if self.records.contains_key(&key) {
            return Err(EngineError::DuplicateRecord {
                entity: "Attendance record".to_string(),
                key: format!("employee {} on {}", key.0, key.1),
            });
        }

        self.last_id += 1;
        let record = new_record.into_record(self.last_id);
        debug!(
            record_id = record.id,
            employee_id = record.employee_id,
            date = %record.date,
            status = ?record.status,
            "Attendance record inserted"
        );

        self.keys_by_id.insert(record.id, key);
        self.records.insert(key, record.clone());
        Ok(record)
    }

    /// Returns the record with the given id, if any.
    pub fn get(&self, id: RecordId) -> Option<&AttendanceRecord> {
        self.keys_by_id.get(&id).and_then(|key| self.records.get(key))
    }

    /// Deletes the record with the given id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotFound`] if no record has that id.
    pub fn delete(&mut self, id: RecordId) -> EngineResult<AttendanceRecord> {
        let key = self
            .keys_by_id
            .remove(&id)
            .ok_or_else(|| EngineError::not_found("Attendance record", id))?;
        let record = self
            .records
            .remove(&key)
            .ok_or_else(|| EngineError::not_found("Attendance record", id))?;
        debug!(record_id = id, employee_id = key.0, date = %key.1, "Attendance record deleted");
        Ok(record)
    }

    /// Counts the employee's records dated within `start..=end`.
    pub fn count_in_range(&self, employee_id: EmployeeId, start: NaiveDate, end: NaiveDate) -> usize {
        self.range(employee_id, start, end).count()
    }

    /// Returns the calendar years, ascending, in which the employee has records.
    pub fn years_with_records(&self, employee_id: EmployeeId) -> Vec<i32> {
        let years: BTreeSet<i32> = self
            .records
            .range((employee_id, NaiveDate::MIN)..=(employee_id, NaiveDate::MAX))
            .map(|((_, date), _)| date.year())
            .collect();
        years.into_iter().collect()
    }

    /// Returns the total number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn range(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &AttendanceRecord> {
        // BTreeMap::range panics on an inverted range.
        let bounds = if start <= end {
            Some((employee_id, start)..=(employee_id, end))
        } else {
            None
        };
        bounds
            .into_iter()
            .flat_map(move |bounds| self.records.range(bounds).map(|(_, r)| r))
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn query_by_employee_and_date_range(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self.range(employee_id, start, end).cloned().collect())
    }

    fn query_by_employee_status_and_date_range(
        &self,
        employee_id: EmployeeId,
        status: AttendanceStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .range(employee_id, start, end)
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }
}
