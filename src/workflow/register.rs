//! In-memory register of leave requests.
//!
//! Owns the requests, assigns ids and routes each action through
//! [`super::actions`]. Storage beyond process memory is the embedding
//! application's concern.

use chrono::{NaiveDate, NaiveDateTime};

use crate::authorization::{EmployeeLookup, approvable_employee_ids};
use crate::config::LeavePolicy;
use crate::error::{LeaveError, LeaveResult};
use crate::models::{EmployeeId, LeaveRequest, LeaveRequestId, LeaveStatus, NewLeaveRequest};

use super::actions;

/// Holds every leave request and the next id to assign.
#[derive(Debug, Clone)]
pub struct LeaveRegister {
    requests: Vec<LeaveRequest>,
    next_id: LeaveRequestId,
}

impl Default for LeaveRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaveRegister {
    /// Creates an empty register; the first request gets id 1.
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates and records a new pending request.
    pub fn submit<L>(
        &mut self,
        draft: NewLeaveRequest,
        lookup: &L,
        policy: &LeavePolicy,
        today: NaiveDate,
    ) -> LeaveResult<&LeaveRequest>
    where
        L: EmployeeLookup + ?Sized,
    {
        let request = actions::submit(self.next_id, draft, &self.requests, lookup, policy, today)?;
        self.next_id += 1;

        let index = self.requests.len();
        self.requests.push(request);
        Ok(&self.requests[index])
    }

    /// Approves request `id` on behalf of `approver_id`.
    pub fn approve<L>(
        &mut self,
        id: LeaveRequestId,
        approver_id: EmployeeId,
        comments: Option<String>,
        lookup: &L,
        now: NaiveDateTime,
    ) -> LeaveResult<&LeaveRequest>
    where
        L: EmployeeLookup + ?Sized,
    {
        let request = self.get_mut(id)?;
        actions::approve(request, approver_id, comments, lookup, now)?;
        Ok(&*request)
    }

    /// Rejects request `id` on behalf of `rejector_id`.
    pub fn reject<L>(
        &mut self,
        id: LeaveRequestId,
        rejector_id: EmployeeId,
        comments: &str,
        lookup: &L,
        policy: &LeavePolicy,
        now: NaiveDateTime,
    ) -> LeaveResult<&LeaveRequest>
    where
        L: EmployeeLookup + ?Sized,
    {
        let request = self.get_mut(id)?;
        actions::reject(request, rejector_id, comments, lookup, policy, now)?;
        Ok(&*request)
    }

    /// Cancels request `id` on behalf of its requester.
    pub fn cancel(&mut self, id: LeaveRequestId, employee_id: EmployeeId) -> LeaveResult<&LeaveRequest> {
        let request = self.get_mut(id)?;
        actions::cancel(request, employee_id)?;
        Ok(&*request)
    }

    /// Looks up a request by id.
    pub fn get(&self, id: LeaveRequestId) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: LeaveRequestId) -> LeaveResult<&mut LeaveRequest> {
        self.requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(LeaveError::LeaveRequestNotFound { leave_request_id: id })
    }

    /// Returns every request of `employee_id`, latest start date first.
    pub fn by_employee(&self, employee_id: EmployeeId) -> Vec<&LeaveRequest> {
        latest_first(self.requests.iter().filter(|r| r.employee_id == employee_id))
    }

    /// Returns the pending requests awaiting `approver_id`, earliest start first.
    ///
    /// The queue covers the approver's direct reports and their direct
    /// reports.
    pub fn pending_approvals<L>(&self, lookup: &L, approver_id: EmployeeId) -> Vec<&LeaveRequest>
    where
        L: EmployeeLookup + ?Sized,
    {
        let employee_ids = approvable_employee_ids(lookup, approver_id);

        let mut requests: Vec<&LeaveRequest> = self
            .requests
            .iter()
            .filter(|r| r.is_pending() && employee_ids.contains(&r.employee_id))
            .collect();
        requests.sort_by_key(|r| r.start_date);
        requests
    }

    /// Returns the number of requests awaiting `approver_id`.
    pub fn pending_count<L>(&self, lookup: &L, approver_id: EmployeeId) -> usize
    where
        L: EmployeeLookup + ?Sized,
    {
        let employee_ids = approvable_employee_ids(lookup, approver_id);
        self.requests
            .iter()
            .filter(|r| r.is_pending() && employee_ids.contains(&r.employee_id))
            .count()
    }

    /// Returns every request, whatever its status, from the employees in
    /// `approver_id`'s queue, latest start date first.
    pub fn approvals_for<L>(&self, lookup: &L, approver_id: EmployeeId) -> Vec<&LeaveRequest>
    where
        L: EmployeeLookup + ?Sized,
    {
        let employee_ids = approvable_employee_ids(lookup, approver_id);
        latest_first(
            self.requests
                .iter()
                .filter(|r| employee_ids.contains(&r.employee_id)),
        )
    }

    /// Returns every request with the given status, latest start date first.
    pub fn by_status(&self, status: LeaveStatus) -> Vec<&LeaveRequest> {
        latest_first(self.requests.iter().filter(|r| r.status == status))
    }

    /// Returns the pending requests of `employee_id` overlapping `[start, end]`.
    pub fn overlapping_pending(
        &self,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
        exclude: Option<LeaveRequestId>,
    ) -> Vec<&LeaveRequest> {
        actions::overlapping_pending(&self.requests, employee_id, start, end, exclude)
    }

    /// Returns the number of requests on record.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if no request has been recorded.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

fn latest_first<'a>(requests: impl Iterator<Item = &'a LeaveRequest>) -> Vec<&'a LeaveRequest> {
    let mut requests: Vec<&LeaveRequest> = requests.collect();
    requests.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    requests
}
