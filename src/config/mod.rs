//! Configuration loading and management for the leave engine.
//!
//! This module provides functionality to load the organisation hierarchy
//! and the leave policy from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/acme").unwrap();
//! println!("Loaded organisation: {}", config.config().organisation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_MAX_COMMENTS_LENGTH, LeaveConfig, LeavePolicy, OrganisationConfig};
