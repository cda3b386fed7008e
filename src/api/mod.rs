//! HTTP API module for the payroll service.
//!
//! This module provides the REST API endpoints for managing employees and
//! attendance and for computing monthly payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeSearchQuery, PeriodQuery, YearQuery};
pub use response::{
    ApiError, ApiErrorResponse, AttendanceDetailResponse, AttendanceDetailRow,
    AttendanceOverviewResponse, AttendanceSummaryRow, PayrollListResponse,
};
pub use state::AppState;
