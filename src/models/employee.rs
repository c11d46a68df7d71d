//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeType enum used to
//! describe the organisational hierarchy that leave approval walks.

use serde::{Deserialize, Serialize};

/// Identifier of an employee record.
pub type EmployeeId = u32;

/// The employee's position in the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Chief executive; may approve leave for anyone.
    Ceo,
    /// Manager; may approve leave for direct reports and their reports.
    Manager,
    /// Team lead; may approve leave for direct reports.
    TeamLead,
    /// Individual contributor.
    Employee,
}

impl std::fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeType::Ceo => write!(f, "CEO"),
            EmployeeType::Manager => write!(f, "Manager"),
            EmployeeType::TeamLead => write!(f, "TeamLead"),
            EmployeeType::Employee => write!(f, "Employee"),
        }
    }
}

/// Represents an employee who can request or approve leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// The payroll employee number (e.g., "1005").
    pub employee_number: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's work email address.
    pub email: String,
    /// Optional mobile number.
    #[serde(default)]
    pub cellphone_number: Option<String>,
    /// The employee's position in the organisation.
    pub employee_type: EmployeeType,
    /// The employee's direct manager, if any.
    #[serde(default)]
    pub manager_id: Option<EmployeeId>,
}

impl Employee {
    /// Returns true if the employee is the CEO.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{Employee, EmployeeType};
    ///
    /// let ceo = Employee {
    ///     id: 1,
    ///     employee_number: "0001".to_string(),
    ///     full_name: "Linda Jenkins".to_string(),
    ///     email: "lindajenkins@acme.com".to_string(),
    ///     cellphone_number: None,
    ///     employee_type: EmployeeType::Ceo,
    ///     manager_id: None,
    /// };
    /// assert!(ceo.is_ceo());
    /// ```
    pub fn is_ceo(&self) -> bool {
        self.employee_type == EmployeeType::Ceo
    }

    /// Returns true if `manager_id` is this employee's direct manager.
    pub fn reports_to(&self, manager_id: EmployeeId) -> bool {
        self.manager_id == Some(manager_id)
    }
}
