//! Leave request state transitions.
//!
//! `Pending` is the only non-terminal status. Approval and rejection need
//! authority over the requester (see [`can_approve`]); cancellation is
//! reserved for the requester. A failed check never modifies the request.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};
use uuid::Uuid;

use crate::authorization::{EmployeeLookup, can_approve};
use crate::calendar::is_date_range_valid_for_leave;
use crate::config::LeavePolicy;
use crate::error::{LeaveError, LeaveResult};
use crate::models::{EmployeeId, LeaveRequest, LeaveRequestId, LeaveStatus, NewLeaveRequest};

/// Comment recorded when a requester withdraws their leave.
pub const CANCELLED_BY_EMPLOYEE: &str = "Cancelled by employee";

/// Returns the pending requests of `employee_id` overlapping `[start, end]`,
/// ordered by start date.
///
/// `exclude` skips one request, so an existing request can be checked
/// against the others.
pub fn overlapping_pending(
    requests: &[LeaveRequest],
    employee_id: EmployeeId,
    start: NaiveDate,
    end: NaiveDate,
    exclude: Option<LeaveRequestId>,
) -> Vec<&LeaveRequest> {
    let mut overlapping: Vec<&LeaveRequest> = requests
        .iter()
        .filter(|r| r.employee_id == employee_id && r.is_pending())
        .filter(|r| Some(r.id) != exclude)
        .filter(|r| r.overlaps(start, end))
        .collect();
    overlapping.sort_by_key(|r| r.start_date);
    overlapping
}

/// Validates a draft and turns it into a pending leave request.
///
/// `existing` is every request already on record; only the same employee's
/// pending ones are considered for overlap.
///
/// # Errors
///
/// - `UnknownEmployee` if the requester does not resolve
/// - `InvalidLeaveRequest` for a past start, an end before the start,
///   overlong comments, or (when the policy requires it) endpoints that are
///   not business days
/// - `OverlappingLeaveRequests` if a pending request already covers part of
///   the range
pub fn submit<L>(
    id: LeaveRequestId,
    draft: NewLeaveRequest,
    existing: &[LeaveRequest],
    lookup: &L,
    policy: &LeavePolicy,
    today: NaiveDate,
) -> LeaveResult<LeaveRequest>
where
    L: EmployeeLookup + ?Sized,
{
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = draft.employee_id,
        start_date = %draft.start_date,
        end_date = %draft.end_date,
        leave_type = %draft.leave_type,
        "Submitting leave request"
    );

    if let Err(err) = validate_draft(&draft, existing, lookup, policy, today) {
        warn!(correlation_id = %correlation_id, error = %err, "Leave request refused");
        return Err(err);
    }

    let request = LeaveRequest::pending(id, draft);
    info!(
        correlation_id = %correlation_id,
        leave_request_id = request.id,
        "Leave request created"
    );
    Ok(request)
}

fn validate_draft<L>(
    draft: &NewLeaveRequest,
    existing: &[LeaveRequest],
    lookup: &L,
    policy: &LeavePolicy,
    today: NaiveDate,
) -> LeaveResult<()>
where
    L: EmployeeLookup + ?Sized,
{
    if lookup.get_by_id(draft.employee_id).is_none() {
        return Err(LeaveError::UnknownEmployee {
            employee_id: draft.employee_id,
        });
    }

    if !policy.allow_past_start_dates && draft.start_date < today {
        return Err(invalid("start_date", "Start date cannot be in the past"));
    }

    if draft.end_date < draft.start_date {
        return Err(invalid("end_date", "End date must be after start date"));
    }

    if let Some(comments) = &draft.comments {
        if comments.chars().count() > policy.max_comments_length {
            return Err(invalid(
                "comments",
                format!(
                    "Comments cannot exceed {} characters",
                    policy.max_comments_length
                ),
            ));
        }
    }

    if policy.require_business_day_endpoints
        && !is_date_range_valid_for_leave(draft.start_date, draft.end_date)
    {
        return Err(invalid(
            "date_range",
            "Leave must start and end on business days (Monday-Friday, excluding public holidays)",
        ));
    }

    let overlapping = overlapping_pending(
        existing,
        draft.employee_id,
        draft.start_date,
        draft.end_date,
        None,
    );
    if !overlapping.is_empty() {
        let details = overlapping
            .iter()
            .map(|r| {
                format!(
                    "{} to {} ({})",
                    r.start_date.format("%Y-%m-%d"),
                    r.end_date.format("%Y-%m-%d"),
                    r.leave_type
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        return Err(LeaveError::OverlappingLeaveRequests { details });
    }

    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> LeaveError {
    LeaveError::InvalidLeaveRequest {
        field: field.to_string(),
        message: message.into(),
    }
}

fn ensure_pending(request: &LeaveRequest) -> LeaveResult<()> {
    if request.is_pending() {
        Ok(())
    } else {
        Err(LeaveError::RequestNotPending {
            leave_request_id: request.id,
            status: request.status,
        })
    }
}

fn ensure_authority<L>(lookup: &L, approver_id: EmployeeId, request: &LeaveRequest) -> LeaveResult<()>
where
    L: EmployeeLookup + ?Sized,
{
    if can_approve(lookup, approver_id, request.employee_id) {
        Ok(())
    } else {
        Err(LeaveError::NotAuthorized {
            approver_id,
            employee_id: request.employee_id,
        })
    }
}

/// Approves a pending request on behalf of `approver_id`.
///
/// # Errors
///
/// `RequestNotPending` if the request was already decided or cancelled,
/// `NotAuthorized` if the approver has no authority over the requester.
pub fn approve<L>(
    request: &mut LeaveRequest,
    approver_id: EmployeeId,
    comments: Option<String>,
    lookup: &L,
    now: NaiveDateTime,
) -> LeaveResult<()>
where
    L: EmployeeLookup + ?Sized,
{
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        leave_request_id = request.id,
        approver_id,
        "Approving leave request"
    );

    if let Err(err) = ensure_pending(request).and_then(|_| ensure_authority(lookup, approver_id, request)) {
        warn!(correlation_id = %correlation_id, error = %err, "Approval refused");
        return Err(err);
    }

    request.status = LeaveStatus::Approved;
    request.approved_by_id = Some(approver_id);
    request.approved_date = Some(now);
    request.approval_comments = comments;

    info!(
        correlation_id = %correlation_id,
        leave_request_id = request.id,
        employee_id = request.employee_id,
        "Leave request approved"
    );
    Ok(())
}

/// Rejects a pending request on behalf of `rejector_id`.
///
/// Checks run in order: the request must be pending, the rejector must
/// have authority, and (if the policy requires it) `comments` must not be
/// blank.
pub fn reject<L>(
    request: &mut LeaveRequest,
    rejector_id: EmployeeId,
    comments: &str,
    lookup: &L,
    policy: &LeavePolicy,
    now: NaiveDateTime,
) -> LeaveResult<()>
where
    L: EmployeeLookup + ?Sized,
{
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        leave_request_id = request.id,
        rejector_id,
        "Rejecting leave request"
    );

    let checked = ensure_pending(request)
        .and_then(|_| ensure_authority(lookup, rejector_id, request))
        .and_then(|_| {
            if policy.require_rejection_comments && comments.trim().is_empty() {
                Err(invalid("rejection_comments", "Rejection comments are required"))
            } else {
                Ok(())
            }
        });
    if let Err(err) = checked {
        warn!(correlation_id = %correlation_id, error = %err, "Rejection refused");
        return Err(err);
    }

    request.status = LeaveStatus::Rejected;
    request.approved_by_id = Some(rejector_id);
    request.approved_date = Some(now);
    request.approval_comments = Some(comments.to_string());

    info!(
        correlation_id = %correlation_id,
        leave_request_id = request.id,
        employee_id = request.employee_id,
        "Leave request rejected"
    );
    Ok(())
}

/// Cancels a pending request on behalf of its requester.
///
/// # Errors
///
/// `NotRequester` if `employee_id` did not submit the request,
/// `RequestNotPending` if it is no longer pending.
pub fn cancel(request: &mut LeaveRequest, employee_id: EmployeeId) -> LeaveResult<()> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        leave_request_id = request.id,
        employee_id,
        "Cancelling leave request"
    );

    let checked = if request.employee_id != employee_id {
        Err(LeaveError::NotRequester {
            leave_request_id: request.id,
            employee_id,
        })
    } else {
        ensure_pending(request)
    };
    if let Err(err) = checked {
        warn!(correlation_id = %correlation_id, error = %err, "Cancellation refused");
        return Err(err);
    }

    request.status = LeaveStatus::Cancelled;
    request.approval_comments = Some(CANCELLED_BY_EMPLOYEE.to_string());

    info!(
        correlation_id = %correlation_id,
        leave_request_id = request.id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "Leave request cancelled"
    );
    Ok(())
}
