//! Domain logic for the learning platform.
//!
//! This crate has no database dependencies. Everything here operates on
//! values already loaded by the caller, which keeps grading, progress and
//! analytics arithmetic unit-testable in isolation.

pub mod access;
pub mod analytics;
pub mod error;
pub mod grading;
pub mod lesson;
pub mod progress;
pub mod question;
pub mod rating;
pub mod roles;
pub mod search;
pub mod types;
