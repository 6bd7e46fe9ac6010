//! Shared types, errors, and configuration for bizdocs.
//!
//! This crate provides common types used across all other crates:
//! - Numeric coercion for user-entered amounts and rates
//! - Summary policies (payload rounding, negative totals)
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
