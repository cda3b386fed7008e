//! Configuration types for the payroll service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::models::{AttendanceStatus, NewEmployee};

fn default_log_filter() -> String {
    "info".to_string()
}

/// Server settings from `server.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The socket address the HTTP service listens on (e.g., "127.0.0.1:8080").
    pub bind_addr: String,
    /// The default tracing filter, used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// An attendance row in `seed.yaml`, referring to its employee by code.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAttendance {
    /// The code of an employee defined in the same seed file.
    pub emp_code: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// Check-in time, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// Check-out time, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    /// The outcome for the day.
    #[serde(default)]
    pub status: AttendanceStatus,
    /// Free-text remark.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Demo data loaded into the stores at start-up.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Employees to register, in order.
    #[serde(default)]
    pub employees: Vec<NewEmployee>,
    /// Attendance records to insert, in order.
    #[serde(default)]
    pub attendance: Vec<SeedAttendance>,
}

impl SeedData {
    /// Returns true when there is nothing to seed.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.attendance.is_empty()
    }
}

/// The complete service configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    server: ServerConfig,
    seed: SeedData,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(server: ServerConfig, seed: SeedData) -> Self {
        Self { server, seed }
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the seed data.
    pub fn seed(&self) -> &SeedData {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults_log_filter() {
        let server: ServerConfig = serde_yaml::from_str("bind_addr: \"0.0.0.0:3000\"").unwrap();
        assert_eq!(server.bind_addr, "0.0.0.0:3000");
        assert_eq!(server.log_filter, "info");
    }

    #[test]
    fn test_seed_attendance_defaults_to_present() {
        let row: SeedAttendance = serde_yaml::from_str(
            "emp_code: EMP-001\ndate: 2026-03-02\ncheck_in: \"09:30:00\"\ncheck_out: \"18:00:00\"",
        )
        .unwrap();
        assert_eq!(row.status, AttendanceStatus::Present);
        assert_eq!(row.check_in, NaiveTime::from_hms_opt(9, 30, 0));
        assert!(row.remarks.is_none());
    }

    #[test]
    fn test_empty_seed() {
        let seed: SeedData = serde_yaml::from_str("{}").unwrap();
        assert!(seed.is_empty());
    }
}
