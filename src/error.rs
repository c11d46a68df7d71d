//! Error types for the leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calendar, configuration and leave workflow can report.
//! Authorization checks never fail: an unknown party simply cannot approve.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{EmployeeId, LeaveRequestId, LeaveStatus};

/// The main error type for the leave engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::LeaveError;
/// use chrono::NaiveDate;
///
/// let error = LeaveError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: start 2025-07-18 is after end 2025-07-14"
/// );
/// ```
#[derive(Debug, Error)]
pub enum LeaveError {
    /// A date range had its start after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The organisation hierarchy in the configuration is inconsistent.
    #[error("Invalid organisation: {message}")]
    InvalidOrganisation {
        /// A description of the inconsistency.
        message: String,
    },

    /// An employee id did not resolve to a known employee.
    #[error("Employee not found: {employee_id}")]
    UnknownEmployee {
        /// The id that did not resolve.
        employee_id: EmployeeId,
    },

    /// A submitted leave request failed validation.
    #[error("Invalid leave request field '{field}': {message}")]
    InvalidLeaveRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The employee already has pending leave covering part of the range.
    #[error(
        "Cannot create leave request. You have the following overlapping pending requests: {details}"
    )]
    OverlappingLeaveRequests {
        /// The overlapping requests, formatted as `start to end (type)`.
        details: String,
    },

    /// The approver has no authority over the employee's leave.
    #[error("Employee {approver_id} is not authorized to approve leave for employee {employee_id}")]
    NotAuthorized {
        /// The employee attempting the approval or rejection.
        approver_id: EmployeeId,
        /// The employee who requested the leave.
        employee_id: EmployeeId,
    },

    /// Someone other than the requester tried to cancel a leave request.
    #[error("Employee {employee_id} can only cancel their own leave requests (request {leave_request_id})")]
    NotRequester {
        /// The leave request being cancelled.
        leave_request_id: LeaveRequestId,
        /// The employee attempting the cancellation.
        employee_id: EmployeeId,
    },

    /// The leave request has already left the pending state.
    #[error("Leave request {leave_request_id} is not pending (current status: {status})")]
    RequestNotPending {
        /// The leave request.
        leave_request_id: LeaveRequestId,
        /// Its current status.
        status: LeaveStatus,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {leave_request_id}")]
    LeaveRequestNotFound {
        /// The id that was not found.
        leave_request_id: LeaveRequestId,
    },
}

/// A type alias for Results that return LeaveError.
pub type LeaveResult<T> = Result<T, LeaveError>;
