//! Core data models for the leave engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leave_request;
mod public_holiday;

pub use employee::{Employee, EmployeeId, EmployeeType};
pub use leave_request::{LeaveRequest, LeaveRequestId, LeaveStatus, LeaveType, NewLeaveRequest};
pub use public_holiday::PublicHoliday;
