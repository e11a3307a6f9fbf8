//! Core data models for the voucher engine.
//!
//! This module contains all the domain models used throughout the pipeline.

mod benefit_result;
mod employee;
mod raw_table;

pub use benefit_result::{BenefitResult, IneligibilityReason, RegionSubtotal, SummaryMetrics};
pub use employee::{EmployeeRecord, EmploymentStatus};
pub use raw_table::RawTable;
