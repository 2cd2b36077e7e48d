//! Core business logic for ProfitPulse.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `period` - Monthly revenue/cost records and lenient intake
//! - `aggregation` - Period record to aggregate snapshot derivation
//! - `simulation` - What-if scenario projections and comparisons
//! - `billing` - Subscription tiers, capability gating, plan catalog
//! - `dashboard` - Month-over-month summaries and trend statistics
//! - `export` - Report context handed to the export/email collaborator

pub mod aggregation;
pub mod billing;
pub mod dashboard;
pub mod export;
pub mod period;
pub mod simulation;
