//! Leave request workflow.
//!
//! This module enforces the leave request lifecycle: submission with
//! validation and overlap detection, approval and rejection gated by
//! [`crate::authorization::can_approve`], and cancellation by the requester.
//! [`LeaveRegister`] keeps requests in memory and exposes the approval queue.

mod actions;
mod register;

pub use actions::{CANCELLED_BY_EMPLOYEE, approve, cancel, overlapping_pending, reject, submit};
pub use register::LeaveRegister;
