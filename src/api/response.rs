//! Response types for the payroll API.
//!
//! This module defines the JSON response bodies and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AttendanceRecord, Employee, EmployeeId, PayMonth, PayrollResult};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidPeriod { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    message,
                    "Month must be between 1 and 12 in a representable year",
                ),
            },
            EngineError::InvalidInput { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_INPUT", message),
            },
            EngineError::NotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", message),
            },
            EngineError::DuplicateRecord { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_RECORD", message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

/// One employee's row in the monthly attendance overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryRow {
    /// The employee's id.
    pub employee_id: EmployeeId,
    /// The employee's code.
    pub emp_code: String,
    /// The employee's name.
    pub name: String,
    /// Attendance records in the month, of any status.
    pub days_recorded: usize,
}

/// Body of `GET /attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceOverviewResponse {
    /// The month summarised.
    pub pay_month: PayMonth,
    /// One row per employee, ordered by name.
    pub employees: Vec<AttendanceSummaryRow>,
}

/// An attendance record together with its raw duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDetailRow {
    /// The stored record.
    #[serde(flatten)]
    pub record: AttendanceRecord,
    /// Check-out minus check-in in hours, rounded to 2 decimal places.
    /// Negative when check-out precedes check-in.
    pub hours: Option<Decimal>,
}

impl From<AttendanceRecord> for AttendanceDetailRow {
    fn from(record: AttendanceRecord) -> Self {
        let hours = record.duration_hours().map(|h| h.round_dp(2));
        Self { record, hours }
    }
}

/// Body of `GET /attendance/:employee_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDetailResponse {
    /// The employee the records belong to.
    pub employee: Employee,
    /// The year the records are listed for.
    pub year: i32,
    /// Every year in which the employee has records, ascending.
    pub available_years: Vec<i32>,
    /// The records of `year`, ascending by date.
    pub records: Vec<AttendanceDetailRow>,
}

/// Body of `GET /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollListResponse {
    /// The month the payroll covers.
    pub pay_month: PayMonth,
    /// Sum of net pay across all employees.
    pub total_net_pay: Decimal,
    /// One result per employee, ordered by name.
    pub results: Vec<PayrollResult>,
}
