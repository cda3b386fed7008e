//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payroll_for_month;
use crate::error::EngineError;
use crate::models::{
    AttendanceRecord, Employee, EmployeeId, NewAttendanceRecord, NewEmployee, PayMonth,
    PayrollResult, RecordId,
};
use crate::store::AttendanceStore;

use super::request::{EmployeeSearchQuery, PeriodQuery, YearQuery};
use super::response::{
    ApiError, ApiErrorResponse, AttendanceDetailResponse, AttendanceDetailRow,
    AttendanceOverviewResponse, AttendanceSummaryRow, PayrollListResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route(
            "/attendance",
            post(create_attendance_handler).get(attendance_overview_handler),
        )
        .route(
            "/attendance/:id",
            get(attendance_detail_handler).delete(delete_attendance_handler),
        )
        .route("/payroll", get(payroll_list_handler))
        .route("/payroll/:employee_id", get(payroll_employee_handler))
        .with_state(state)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Logs a failed request and converts the error to its HTTP response.
fn reject(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

fn json_body<T>(correlation_id: Uuid, payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

fn query_params<T>(correlation_id: Uuid, query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query.map(|Query(params)| params).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(correlation_id = %correlation_id, error = %body_text, "Invalid query string");
        ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
    })
}

fn path_id(correlation_id: Uuid, path: Result<Path<u64>, PathRejection>) -> ApiResult<u64> {
    path.map(|Path(id)| id).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(correlation_id = %correlation_id, error = %body_text, "Invalid path parameter");
        ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
    })
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let new_employee = json_body(correlation_id, payload)?;
    let employee = state
        .employees()
        .write()
        .await
        .insert(new_employee)
        .map_err(|err| reject(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = employee.id,
        emp_code = %employee.emp_code,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees.
async fn list_employees_handler(
    State(state): State<AppState>,
    query: Result<Query<EmployeeSearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Employee>>> {
    let correlation_id = Uuid::new_v4();
    let query = query_params(correlation_id, query)?;

    let directory = state.employees().read().await;
    let employees: Vec<Employee> = directory
        .search(query.q.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();

    info!(
        correlation_id = %correlation_id,
        matches = employees.len(),
        "Employees listed"
    );
    Ok(Json(employees))
}

/// Handler for POST /attendance.
async fn create_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewAttendanceRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AttendanceRecord>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create attendance request");

    let new_record = json_body(correlation_id, payload)?;
    state
        .employees()
        .read()
        .await
        .get(new_record.employee_id)
        .map_err(|err| reject(correlation_id, err))?;

    let record = state
        .attendance()
        .write()
        .await
        .insert(new_record)
        .map_err(|err| reject(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        record_id = record.id,
        employee_id = record.employee_id,
        date = %record.date,
        "Attendance record created"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for DELETE /attendance/:id.
async fn delete_attendance_handler(
    State(state): State<AppState>,
    path: Result<Path<RecordId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, path)?;

    let record = state
        .attendance()
        .write()
        .await
        .delete(id)
        .map_err(|err| reject(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        record_id = record.id,
        employee_id = record.employee_id,
        "Attendance record deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /attendance.
///
/// Counts each employee's records in the selected month.
async fn attendance_overview_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<Json<AttendanceOverviewResponse>> {
    let correlation_id = Uuid::new_v4();
    let pay_month = query_params(correlation_id, query)?
        .resolve(today())
        .map_err(|err| reject(correlation_id, err))?;

    let directory = state.employees().read().await;
    let attendance = state.attendance().read().await;

    let employees: Vec<AttendanceSummaryRow> = directory
        .list_by_name()
        .into_iter()
        .map(|employee| AttendanceSummaryRow {
            employee_id: employee.id,
            emp_code: employee.emp_code.clone(),
            name: employee.name.clone(),
            days_recorded: attendance.count_in_range(
                employee.id,
                pay_month.first_day(),
                pay_month.last_day(),
            ),
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        year = pay_month.year(),
        month = pay_month.month(),
        employees = employees.len(),
        "Attendance overview listed"
    );
    Ok(Json(AttendanceOverviewResponse {
        pay_month,
        employees,
    }))
}

/// Handler for GET /attendance/:employee_id.
///
/// Lists one employee's records for a year with their raw durations.
async fn attendance_detail_handler(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> ApiResult<Json<AttendanceDetailResponse>> {
    let correlation_id = Uuid::new_v4();
    let employee_id = path_id(correlation_id, path)?;
    let year = query_params(correlation_id, query)?.resolve(today());

    // January validates the year and carries its bounds.
    let year_span = PayMonth::new(1, year).map_err(|err| reject(correlation_id, err))?;

    let employee = state
        .employees()
        .read()
        .await
        .get(employee_id)
        .cloned()
        .map_err(|err| reject(correlation_id, err))?;

    let attendance = state.attendance().read().await;
    let records: Vec<AttendanceDetailRow> = attendance
        .query_by_employee_and_date_range(employee_id, year_span.year_start(), year_span.year_end())
        .map_err(|err| reject(correlation_id, err))?
        .into_iter()
        .map(AttendanceDetailRow::from)
        .collect();
    let available_years = attendance.years_with_records(employee_id);

    info!(
        correlation_id = %correlation_id,
        employee_id = employee_id,
        year = year,
        records = records.len(),
        "Attendance detail listed"
    );
    Ok(Json(AttendanceDetailResponse {
        employee,
        year,
        available_years,
        records,
    }))
}

/// Handler for GET /payroll.
///
/// Computes the payroll of every employee for the selected month.
async fn payroll_list_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<Json<PayrollListResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let pay_month = query_params(correlation_id, query)?
        .resolve(today())
        .map_err(|err| reject(correlation_id, err))?;

    let start_time = Instant::now();
    let directory = state.employees().read().await;
    let attendance = state.attendance().read().await;

    let results = directory
        .list_by_name()
        .into_iter()
        .map(|employee| compute_payroll_for_month(employee, pay_month, &*attendance))
        .collect::<Result<Vec<PayrollResult>, _>>()
        .map_err(|err| reject(correlation_id, err))?;
    let total_net_pay: Decimal = results.iter().map(|r| r.net_pay).sum();

    info!(
        correlation_id = %correlation_id,
        year = pay_month.year(),
        month = pay_month.month(),
        employees = results.len(),
        total_net_pay = %total_net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll completed successfully"
    );
    Ok(Json(PayrollListResponse {
        pay_month,
        total_net_pay,
        results,
    }))
}

/// Handler for GET /payroll/:employee_id.
async fn payroll_employee_handler(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<Json<PayrollResult>> {
    let correlation_id = Uuid::new_v4();
    let employee_id = path_id(correlation_id, path)?;
    info!(
        correlation_id = %correlation_id,
        employee_id = employee_id,
        "Processing employee payroll request"
    );

    let pay_month = query_params(correlation_id, query)?
        .resolve(today())
        .map_err(|err| reject(correlation_id, err))?;

    let start_time = Instant::now();
    let directory = state.employees().read().await;
    let employee = directory
        .get(employee_id)
        .map_err(|err| reject(correlation_id, err))?;
    let attendance = state.attendance().read().await;

    let result = compute_payroll_for_month(employee, pay_month, &*attendance)
        .map_err(|err| reject(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = employee_id,
        net_pay = %result.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll completed successfully"
    );
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, Response},
    };
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config").expect("Failed to load config");
        AppState::from_seed(config.seed()).expect("Failed to seed state")
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        router
            .oneshot(
                builder
                    .body(body.map(|b| Body::from(b.to_string())).unwrap_or_default())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// API-001: payroll for a seeded employee
    #[tokio::test]
    async fn test_api_001_employee_payroll_returns_200() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/payroll/2?month=3&year=2026", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        // Five 8.5 hour days from Sunday 1 March: 8.5 in W09, 34 in W10.
        let result: PayrollResult = read_json(response).await;
        assert_eq!(result.emp_code, "EMP-002");
        assert_eq!(result.weekly_hours.len(), 2);
        assert_eq!(result.total_shortfall_hours, dec("37.5"));
        assert_eq!(result.hours_deduction, dec("10546.875"));
        assert_eq!(result.net_pay, dec("34453.125"));
    }

    /// API-002: malformed JSON returns 400
    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "POST", "/employees", Some("{ not json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    /// API-003: missing required field returns 400
    #[tokio::test]
    async fn test_api_003_missing_field_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "POST", "/employees", Some(r#"{"name": "No Code"}"#)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    /// API-004: unknown employee returns 404
    #[tokio::test]
    async fn test_api_004_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/payroll/99?month=3&year=2026", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "NOT_FOUND");
    }

    /// API-005: out-of-range month returns 400
    #[tokio::test]
    async fn test_api_005_invalid_month_returns_400() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/payroll?month=13&year=2026", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_non_numeric_query_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/payroll?month=march", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_non_numeric_path_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/payroll/abc", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_payroll_list_ordered_by_name() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/payroll?month=3&year=2026", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let list: PayrollListResponse = read_json(response).await;
        let names: Vec<&str> = list.results.iter().map(|r| r.employee_name.as_str()).collect();
        assert_eq!(names, vec!["Aditya Verma", "Riya Sharma"]);
        assert_eq!(
            list.total_net_pay,
            list.results.iter().map(|r| r.net_pay).sum::<Decimal>()
        );
    }

    #[tokio::test]
    async fn test_attendance_overview_counts_month_records() {
        let router = create_router(create_test_state());

        let response = send(router, "GET", "/attendance?month=3&year=2026", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let overview: AttendanceOverviewResponse = read_json(response).await;
        assert_eq!(overview.employees.len(), 2);
        assert!(overview.employees.iter().all(|row| row.days_recorded == 5));
    }
}
