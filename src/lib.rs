//! Leave Engine for South African leave management
//!
//! This crate provides the business-day calendar (public holidays, Easter,
//! Sunday-observed shifts and date-range arithmetic) and the hierarchical
//! approval rules that decide who may approve whose leave, together with
//! the leave request lifecycle built on them.

#![warn(missing_docs)]

pub mod authorization;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod workflow;
