//! Shared utilities for the nexup publisher.
//!
//! This crate provides cross-cutting concerns used by all other nexup
//! crates: error types, filesystem helpers, and terminal progress
//! indicators.

pub mod errors;
pub mod fs;
pub mod progress;
