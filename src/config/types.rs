//! Configuration types for the leave engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::Employee;

/// Default maximum length of requester comments, in characters.
pub const DEFAULT_MAX_COMMENTS_LENGTH: usize = 500;

/// Organisation configuration file structure (`organisation.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct OrganisationConfig {
    /// The organisation's display name.
    pub name: String,
    /// Every employee, with their manager edges.
    pub employees: Vec<Employee>,
}

/// Leave policy configuration file structure (`policy.yaml`).
///
/// Every field is optional in YAML and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeavePolicy {
    /// Maximum length of requester comments, in characters.
    pub max_comments_length: usize,
    /// Whether leave may be requested for dates before today.
    pub allow_past_start_dates: bool,
    /// Whether both endpoints of a request must be business days.
    pub require_business_day_endpoints: bool,
    /// Whether a rejection must carry non-blank comments.
    pub require_rejection_comments: bool,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            max_comments_length: DEFAULT_MAX_COMMENTS_LENGTH,
            allow_past_start_dates: false,
            require_business_day_endpoints: true,
            require_rejection_comments: true,
        }
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct LeaveConfig {
    /// The organisation and its employees.
    organisation: OrganisationConfig,
    /// The leave policy.
    policy: LeavePolicy,
}

impl LeaveConfig {
    /// Creates a new LeaveConfig from its component parts.
    pub fn new(organisation: OrganisationConfig, policy: LeavePolicy) -> Self {
        Self {
            organisation,
            policy,
        }
    }

    /// Returns the organisation configuration.
    pub fn organisation(&self) -> &OrganisationConfig {
        &self.organisation
    }

    /// Returns the leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }
}
