//! Who may approve whose leave.
//!
//! The check looks at most two hops up the management chain: the
//! employee's direct manager, and (for Manager-classified approvers) the
//! direct manager's own manager. A CEO may approve anyone. Deeper
//! ancestors are deliberately not considered.

use tracing::debug;

use crate::models::{EmployeeId, EmployeeType};

use super::lookup::EmployeeLookup;

/// Returns true if `approver_id` may approve or reject leave requested by
/// `employee_id`.
///
/// Resolution order, first match wins:
/// 1. either party unknown: `false`
/// 2. approver is the CEO: `true`
/// 3. approver is the employee's direct manager: `true`
/// 4. approver is a Manager and manages the employee's direct manager: `true`
/// 5. otherwise `false`
///
/// # Example
///
/// ```
/// use leave_engine::authorization::{EmployeeDirectory, can_approve};
/// use leave_engine::models::{Employee, EmployeeType};
///
/// let employee = |id, employee_type, manager_id| Employee {
///     id,
///     employee_number: format!("{:04}", id),
///     full_name: format!("Employee {}", id),
///     email: format!("employee{}@acme.com", id),
///     cellphone_number: None,
///     employee_type,
///     manager_id,
/// };
/// let directory = EmployeeDirectory::new(vec![
///     employee(1, EmployeeType::Ceo, None),
///     employee(2, EmployeeType::Manager, Some(1)),
///     employee(3, EmployeeType::TeamLead, Some(2)),
///     employee(4, EmployeeType::Employee, Some(3)),
/// ]);
///
/// assert!(can_approve(&directory, 3, 4)); // direct manager
/// assert!(can_approve(&directory, 2, 4)); // manager's manager
/// assert!(can_approve(&directory, 1, 4)); // CEO
/// assert!(!can_approve(&directory, 4, 3));
/// ```
pub fn can_approve<L>(lookup: &L, approver_id: EmployeeId, employee_id: EmployeeId) -> bool
where
    L: EmployeeLookup + ?Sized,
{
    let Some(employee) = lookup.get_by_id(employee_id) else {
        debug!(approver_id, employee_id, "Employee not found, approval denied");
        return false;
    };

    let Some(approver) = lookup.get_by_id(approver_id) else {
        debug!(approver_id, employee_id, "Approver not found, approval denied");
        return false;
    };

    if approver.is_ceo() {
        return true;
    }

    if employee.reports_to(approver_id) {
        return true;
    }

    if approver.employee_type == EmployeeType::Manager
        && let Some(manager_id) = employee.manager_id
    {
        let is_grandmanager = lookup
            .get_by_id(manager_id)
            .is_some_and(|manager| manager.reports_to(approver_id));
        if !is_grandmanager {
            debug!(approver_id, employee_id, "Manager is not above the employee's manager, approval denied");
        }
        return is_grandmanager;
    }

    debug!(
        approver_id,
        employee_id,
        approver_type = %approver.employee_type,
        "Approver has no authority over employee"
    );
    false
}

/// Returns true if `manager_id` is the direct manager of `employee_id`.
///
/// Only the direct edge counts; an unknown employee yields `false`.
pub fn is_manager_of<L>(lookup: &L, manager_id: EmployeeId, employee_id: EmployeeId) -> bool
where
    L: EmployeeLookup + ?Sized,
{
    lookup
        .get_by_id(employee_id)
        .is_some_and(|employee| employee.reports_to(manager_id))
}

/// Returns the employees whose leave requests appear in `approver_id`'s
/// approval queue: direct reports and their direct reports.
///
/// Like [`can_approve`], this stops two levels down.
pub fn approvable_employee_ids<L>(lookup: &L, approver_id: EmployeeId) -> Vec<EmployeeId>
where
    L: EmployeeLookup + ?Sized,
{
    let direct = lookup.direct_reports(approver_id);
    let indirect: Vec<EmployeeId> = direct
        .iter()
        .flat_map(|report_id| lookup.direct_reports(*report_id))
        .collect();

    direct.into_iter().chain(indirect).collect()
}
