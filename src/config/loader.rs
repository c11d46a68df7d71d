//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! organisation hierarchy and leave policy from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::authorization::EmployeeDirectory;
use crate::error::{LeaveError, LeaveResult};
use crate::models::{Employee, EmployeeId};

use super::types::{LeaveConfig, LeavePolicy, OrganisationConfig};

/// Loads and provides access to leave configuration.
///
/// # Directory Structure
///
/// ```text
/// config/acme/
/// ├── organisation.yaml   # Organisation name and employee hierarchy
/// └── policy.yaml         # Leave policy
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/acme").unwrap();
/// let ceo = loader.get_employee(1).unwrap();
/// println!("CEO: {}", ceo.full_name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeaveConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - An employee record is malformed or the hierarchy is inconsistent
    ///   (`InvalidOrganisation`)
    pub fn load<P: AsRef<Path>>(path: P) -> LeaveResult<Self> {
        let path = path.as_ref();

        let organisation = Self::load_yaml::<OrganisationConfig>(&path.join("organisation.yaml"))?;
        validate_organisation(&organisation)?;

        let policy = Self::load_yaml::<LeavePolicy>(&path.join("policy.yaml"))?;

        info!(
            organisation = %organisation.name,
            employees = organisation.employees.len(),
            "Loaded leave configuration"
        );

        Ok(Self {
            config: LeaveConfig::new(organisation, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LeaveResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LeaveError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LeaveError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &LeaveConfig {
        &self.config
    }

    /// Returns the leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        self.config.policy()
    }

    /// Gets an employee record by id.
    ///
    /// Returns `UnknownEmployee` if no such employee is configured.
    pub fn get_employee(&self, id: EmployeeId) -> LeaveResult<&Employee> {
        self.config
            .organisation()
            .employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(LeaveError::UnknownEmployee { employee_id: id })
    }

    /// Builds an in-memory employee directory from the configured hierarchy.
    pub fn directory(&self) -> EmployeeDirectory {
        EmployeeDirectory::new(self.config.organisation().employees.iter().cloned())
    }
}

/// Bounds on `employee_number` length, in characters.
const EMPLOYEE_NUMBER_LENGTH: std::ops::RangeInclusive<usize> = 4..=10;
/// Maximum `full_name` length, in characters.
const MAX_FULL_NAME_LENGTH: usize = 100;

/// Checks every employee record, then that ids are unique and every manager
/// edge points at a configured employee other than the employee itself.
fn validate_organisation(organisation: &OrganisationConfig) -> LeaveResult<()> {
    for employee in &organisation.employees {
        validate_employee(employee).map_err(|reason| LeaveError::InvalidOrganisation {
            message: format!("employee {}: {}", employee.id, reason),
        })?;
    }

    let mut ids = HashSet::new();
    for employee in &organisation.employees {
        if !ids.insert(employee.id) {
            return Err(LeaveError::InvalidOrganisation {
                message: format!("duplicate employee id {}", employee.id),
            });
        }
    }

    for employee in &organisation.employees {
        match employee.manager_id {
            Some(manager_id) if manager_id == employee.id => {
                return Err(LeaveError::InvalidOrganisation {
                    message: format!("employee {} cannot manage themselves", employee.id),
                });
            }
            Some(manager_id) if !ids.contains(&manager_id) => {
                return Err(LeaveError::InvalidOrganisation {
                    message: format!(
                        "employee {} references unknown manager {}",
                        employee.id, manager_id
                    ),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

fn validate_employee(employee: &Employee) -> Result<(), &'static str> {
    if employee.employee_number.trim().is_empty() {
        return Err("Employee number is required");
    }
    if !EMPLOYEE_NUMBER_LENGTH.contains(&employee.employee_number.chars().count()) {
        return Err("Employee number must be between 4 and 10 characters");
    }

    if employee.full_name.trim().is_empty() {
        return Err("Full name is required");
    }
    if employee.full_name.chars().count() > MAX_FULL_NAME_LENGTH {
        return Err("Full name cannot exceed 100 characters");
    }

    if employee.email.trim().is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(&employee.email) {
        return Err("Invalid email format");
    }

    Ok(())
}

/// A single `@` with text on both sides and no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
