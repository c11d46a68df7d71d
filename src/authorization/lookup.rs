//! Employee lookup contract and its in-memory implementation.

use std::collections::HashMap;

use crate::models::{Employee, EmployeeId};

/// Read access to employee records, as needed by approval checks.
///
/// Implementations are point reads by id. A miss is `None`, never an error:
/// callers treat an unknown employee as someone who cannot approve or be
/// approved.
pub trait EmployeeLookup {
    /// Fetches an employee by id.
    fn get_by_id(&self, id: EmployeeId) -> Option<Employee>;

    /// Returns the ids of the employees whose direct manager is `manager_id`.
    fn direct_reports(&self, manager_id: EmployeeId) -> Vec<EmployeeId>;
}

/// An in-memory employee directory keyed by id.
///
/// # Example
///
/// ```
/// use leave_engine::authorization::{EmployeeDirectory, EmployeeLookup};
/// use leave_engine::models::{Employee, EmployeeType};
///
/// let directory = EmployeeDirectory::new(vec![Employee {
///     id: 1,
///     employee_number: "0001".to_string(),
///     full_name: "Linda Jenkins".to_string(),
///     email: "lindajenkins@acme.com".to_string(),
///     cellphone_number: None,
///     employee_type: EmployeeType::Ceo,
///     manager_id: None,
/// }]);
///
/// assert!(directory.get_by_id(1).is_some());
/// assert!(directory.get_by_id(2).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: HashMap<EmployeeId, Employee>,
}

impl EmployeeDirectory {
    /// Creates a directory from employee records. Later duplicates win.
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: employees.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    /// Adds or replaces an employee record.
    pub fn insert(&mut self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }

    /// Returns the number of employees in the directory.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over all employees in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }
}

impl EmployeeLookup for EmployeeDirectory {
    fn get_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.employees.get(&id).cloned()
    }

    fn direct_reports(&self, manager_id: EmployeeId) -> Vec<EmployeeId> {
        let mut ids: Vec<EmployeeId> = self
            .employees
            .values()
            .filter(|e| e.reports_to(manager_id))
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
