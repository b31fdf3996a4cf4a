//! # Config Crate
//!
//! Centralized configuration constants for the snapshot rewrite pipeline.
//! Every module name, member name and marker string the rewriter matches on
//! is defined here so the rule tables live in one place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{is_assert_module_source, is_assertion_member, LOG_OBJECT};
//!
//! assert!(is_assert_module_source("node:assert"));
//! assert!(is_assertion_member("strictEqual"));
//! assert!(!is_assertion_member("ok"));
//! assert_eq!(LOG_OBJECT, "console");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Fixed Rules**: The rule tables are compile-time data, not runtime options
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
