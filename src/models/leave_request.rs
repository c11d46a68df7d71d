//! Leave request model and its status lifecycle.
//!
//! A request starts `Pending` and moves at most once to `Approved`,
//! `Rejected` or `Cancelled`. The transitions themselves live in
//! [`crate::workflow`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::business_days_count;
use crate::error::LeaveResult;

use super::employee::EmployeeId;

/// Identifier of a leave request.
pub type LeaveRequestId = u32;

/// The kind of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual (vacation) leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Personal or family responsibility leave.
    Personal,
    /// Study or training leave.
    Training,
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Annual => write!(f, "Annual"),
            LeaveType::Sick => write!(f, "Sick"),
            LeaveType::Personal => write!(f, "Personal"),
            LeaveType::Training => write!(f, "Training"),
        }
    }
}

/// Where a leave request is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by someone with authority over the requester.
    Approved,
    /// Rejected by someone with authority over the requester.
    Rejected,
    /// Withdrawn by the requester.
    Cancelled,
}

impl LeaveStatus {
    /// Returns true for statuses no transition may leave.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "Pending"),
            LeaveStatus::Approved => write!(f, "Approved"),
            LeaveStatus::Rejected => write!(f, "Rejected"),
            LeaveStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A leave request as drafted by an employee, before it is assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    /// The employee requesting leave.
    pub employee_id: EmployeeId,
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// Optional free-text comments from the requester.
    #[serde(default)]
    pub comments: Option<String>,
}

/// A submitted leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: LeaveRequestId,
    /// The employee requesting leave.
    pub employee_id: EmployeeId,
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// Optional free-text comments from the requester.
    #[serde(default)]
    pub comments: Option<String>,
    /// Current lifecycle status.
    pub status: LeaveStatus,
    /// The employee who approved or rejected the request.
    #[serde(default)]
    pub approved_by_id: Option<EmployeeId>,
    /// When the request was approved or rejected.
    #[serde(default)]
    pub approved_date: Option<NaiveDateTime>,
    /// Comments recorded with the decision or cancellation.
    #[serde(default)]
    pub approval_comments: Option<String>,
}

impl LeaveRequest {
    /// Creates a pending request from a draft.
    pub fn pending(id: LeaveRequestId, draft: NewLeaveRequest) -> Self {
        Self {
            id,
            employee_id: draft.employee_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            leave_type: draft.leave_type,
            comments: draft.comments,
            status: LeaveStatus::Pending,
            approved_by_id: None,
            approved_date: None,
            approval_comments: None,
        }
    }

    /// Returns true if this request covers any day in `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{LeaveRequest, LeaveType, NewLeaveRequest};
    /// use chrono::NaiveDate;
    ///
    /// let date = |d| NaiveDate::from_ymd_opt(2025, 7, d).unwrap();
    /// let request = LeaveRequest::pending(1, NewLeaveRequest {
    ///     employee_id: 5,
    ///     start_date: date(14),
    ///     end_date: date(18),
    ///     leave_type: LeaveType::Annual,
    ///     comments: None,
    /// });
    ///
    /// assert!(request.overlaps(date(18), date(22)));
    /// assert!(!request.overlaps(date(21), date(25)));
    /// ```
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }

    /// Returns true while the request still awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// Counts the business days this request covers.
    pub fn business_days(&self) -> LeaveResult<usize> {
        business_days_count(self.start_date, self.end_date)
    }
}
