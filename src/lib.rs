//! Meal Voucher Benefit Engine
//!
//! This crate unifies heterogeneous employee spreadsheets into one canonical
//! record set, applies eligibility exclusion rules, and computes monthly
//! meal/food-voucher benefit amounts with union-region adjustments and
//! auditable summary metrics.

#![warn(missing_docs)]

pub mod api;
pub mod benefit;
pub mod config;
pub mod error;
pub mod models;
pub mod unify;
