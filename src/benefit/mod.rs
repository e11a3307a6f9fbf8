//! Benefit computation for the voucher engine.
//!
//! This module contains the eligibility rule engine and the value
//! computation/aggregation pass over the unified record set.

mod compute;
mod eligibility;

pub use compute::{UNASSIGNED_REGION, compute};
pub use eligibility::classify;
