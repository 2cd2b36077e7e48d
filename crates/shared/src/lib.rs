//! Shared configuration, errors, and collaborator services for ProfitPulse.
//!
//! This crate provides plumbing used across all other crates:
//! - Application-wide error types with HTTP mappings
//! - Configuration management
//! - The outbound email collaborator (report delivery)

pub mod config;
pub mod email;
pub mod error;

pub use config::AppConfig;
pub use email::{EmailError, EmailService};
pub use error::{AppError, AppResult};
