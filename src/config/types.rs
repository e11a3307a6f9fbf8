//! Configuration types for the voucher engine.
//!
//! The only runtime configuration is the union adjustment table: a mapping
//! from regional union codes to fixed monetary adjustments. It is injected
//! into the benefit engine rather than hardcoded so tests and deployments
//! can override it, and it is read-only once loaded.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Mapping from union region code to its fixed monetary adjustment.
///
/// Region codes are uppercase state-style codes (e.g., "SP", "RJ"). Lookups
/// for unknown or missing regions yield a zero adjustment, never an error.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use voucher_engine::config::UnionTable;
///
/// let table = UnionTable::default();
/// assert_eq!(table.adjustment_for(Some("RJ")), Decimal::new(7000, 2));
/// assert_eq!(table.adjustment_for(Some("XX")), Decimal::ZERO);
/// assert_eq!(table.adjustment_for(None), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnionTable {
    /// Region code to adjustment amount.
    adjustments: HashMap<String, Decimal>,
}

impl UnionTable {
    /// Creates a table from an explicit mapping.
    pub fn new(adjustments: HashMap<String, Decimal>) -> Self {
        Self { adjustments }
    }

    /// Returns the adjustment for a region, zero when unknown or absent.
    pub fn adjustment_for(&self, region: Option<&str>) -> Decimal {
        region
            .and_then(|code| self.adjustments.get(code))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the configured region codes.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.adjustments.keys().map(String::as_str)
    }
}

impl Default for UnionTable {
    /// The built-in table: the four regions the benefit policy recognizes.
    fn default() -> Self {
        let adjustments = HashMap::from([
            ("SP".to_string(), Decimal::new(5000, 2)),
            ("RJ".to_string(), Decimal::new(7000, 2)),
            ("PR".to_string(), Decimal::new(6000, 2)),
            ("RS".to_string(), Decimal::new(8000, 2)),
        ]);
        Self { adjustments }
    }
}
