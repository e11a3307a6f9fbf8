//! Benefit value computation and aggregation.
//!
//! Consumes the unified record set read-only and produces one
//! [`BenefitResult`] per record plus [`SummaryMetrics`], in a single pass.
//! The computation never fails: missing base values are treated as zero and
//! unknown regions yield a zero adjustment, per the documented defaults.

use rust_decimal::Decimal;

use crate::config::UnionTable;
use crate::models::{BenefitResult, EmployeeRecord, RegionSubtotal, SummaryMetrics};

use super::eligibility::classify;

/// Region key used in summaries for eligible employees without a known
/// union region. Lowercase so it can never collide with a region code.
pub const UNASSIGNED_REGION: &str = "unassigned";

/// Computes benefit results and summary metrics for a unified record set.
///
/// The result sequence preserves the input record order and is bit-identical
/// across repeated runs on the same input. Ineligible employees are included
/// with a zero adjustment and zero final value so the summary can always be
/// re-derived from the sequence.
///
/// # Examples
///
/// ```
/// use voucher_engine::benefit::compute;
/// use voucher_engine::config::UnionTable;
/// use voucher_engine::models::{EmployeeRecord, EmploymentStatus};
/// use rust_decimal::Decimal;
///
/// let records = vec![EmployeeRecord {
///     employee_id: "1001".to_string(),
///     name: None,
///     role: Some("Analista".to_string()),
///     status: EmploymentStatus::Active,
///     union_region: Some("RJ".to_string()),
///     base_value: Some(Decimal::new(50000, 2)),
/// }];
///
/// let (results, summary) = compute(&records, &UnionTable::default());
/// assert_eq!(results[0].final_value, Decimal::new(57000, 2));
/// assert_eq!(summary.eligible_count, 1);
/// ```
pub fn compute(
    records: &[EmployeeRecord],
    unions: &UnionTable,
) -> (Vec<BenefitResult>, SummaryMetrics) {
    let mut results = Vec::with_capacity(records.len());
    let mut summary = SummaryMetrics::zeroed();

    for record in records {
        summary.total_records += 1;

        let result = match classify(record) {
            Some(reason) => {
                summary.ineligible_count += 1;
                *summary.ineligible_by_reason.entry(reason).or_insert(0) += 1;

                BenefitResult {
                    employee_id: record.employee_id.clone(),
                    eligible: false,
                    ineligibility_reason: Some(reason),
                    union_adjustment: Decimal::ZERO,
                    final_value: Decimal::ZERO,
                }
            }
            None => {
                let adjustment = unions.adjustment_for(record.union_region.as_deref());
                let base = record.base_value.unwrap_or(Decimal::ZERO);
                let final_value = base + adjustment;

                summary.eligible_count += 1;
                summary.total_disbursed += final_value;

                let region_key = record
                    .union_region
                    .clone()
                    .unwrap_or_else(|| UNASSIGNED_REGION.to_string());
                let subtotal = summary
                    .by_region
                    .entry(region_key)
                    .or_insert_with(RegionSubtotal::default);
                subtotal.employees += 1;
                subtotal.total += final_value;

                BenefitResult {
                    employee_id: record.employee_id.clone(),
                    eligible: true,
                    ineligibility_reason: None,
                    union_adjustment: adjustment,
                    final_value,
                }
            }
        };

        results.push(result);
    }

    (results, summary)
}
