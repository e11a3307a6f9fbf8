//! Benefit result and summary models.
//!
//! This module contains the per-employee [`BenefitResult`] and the aggregate
//! [`SummaryMetrics`] produced by the benefit engine.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed exclusion categories that make an employee ineligible.
///
/// Ordered by rule priority: role categories first, then status categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IneligibilityReason {
    /// Role matches the intern category ("estagiário").
    Intern,
    /// Role matches the apprentice category ("aprendiz").
    Apprentice,
    /// Role matches the director category ("diretor").
    Director,
    /// Status is on-leave ("afastado").
    OnLeave,
    /// Status is terminated ("demitido").
    Terminated,
    /// Status is abroad ("exterior").
    Abroad,
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IneligibilityReason::Intern => "intern",
            IneligibilityReason::Apprentice => "apprentice",
            IneligibilityReason::Director => "director",
            IneligibilityReason::OnLeave => "on_leave",
            IneligibilityReason::Terminated => "terminated",
            IneligibilityReason::Abroad => "abroad",
        };
        write!(f, "{}", label)
    }
}

/// Per-employee outcome of one benefit computation.
///
/// One result is emitted for every unified record, eligible or not, so the
/// summary can always be re-derived from the result sequence alone.
/// Ineligible employees carry a zero adjustment and zero final value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitResult {
    /// The source employee identifier.
    pub employee_id: String,
    /// Whether the employee qualifies for the benefit.
    pub eligible: bool,
    /// The exclusion category when `eligible` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ineligibility_reason: Option<IneligibilityReason>,
    /// The union-region adjustment applied (zero for unknown regions).
    pub union_adjustment: Decimal,
    /// `base_value + union_adjustment`, exact two-digit decimal currency.
    pub final_value: Decimal,
}

/// Eligible headcount and disbursed total for one union region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSubtotal {
    /// Number of eligible employees in the region.
    pub employees: u64,
    /// Total benefit value disbursed in the region.
    pub total: Decimal,
}

/// Aggregate metrics for one batch, recomputed fresh on every run.
///
/// # Example
///
/// ```
/// use voucher_engine::models::SummaryMetrics;
///
/// let summary = SummaryMetrics::zeroed();
/// assert_eq!(summary.total_records, 0);
/// assert!(summary.by_region.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Number of records that entered the computation.
    pub total_records: u64,
    /// Number of eligible employees.
    pub eligible_count: u64,
    /// Number of ineligible employees.
    pub ineligible_count: u64,
    /// Ineligible headcount broken down by exclusion category.
    pub ineligible_by_reason: BTreeMap<IneligibilityReason, u64>,
    /// Total benefit value disbursed across all eligible employees.
    pub total_disbursed: Decimal,
    /// Eligible headcount and disbursed total per union region.
    pub by_region: BTreeMap<String, RegionSubtotal>,
}

impl SummaryMetrics {
    /// Returns an all-zero summary, the result of an empty batch.
    pub fn zeroed() -> Self {
        Self {
            total_records: 0,
            eligible_count: 0,
            ineligible_count: 0,
            ineligible_by_reason: BTreeMap::new(),
            total_disbursed: Decimal::ZERO,
            by_region: BTreeMap::new(),
        }
    }
}
