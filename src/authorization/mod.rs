//! Leave approval authorization over the organisational hierarchy.
//!
//! Employee records come from an [`EmployeeLookup`]; the checks here only
//! read them. A lookup miss always denies.

mod approval;
mod lookup;

pub use approval::{approvable_employee_ids, can_approve, is_manager_of};
pub use lookup::{EmployeeDirectory, EmployeeLookup};
