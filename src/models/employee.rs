//! Employee record model and employment status normalization.
//!
//! This module defines the canonical [`EmployeeRecord`] produced by
//! unification and the [`EmploymentStatus`] controlled vocabulary derived
//! from free-text source values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Controlled employment status vocabulary.
///
/// Source spreadsheets carry free-text situation columns in Portuguese or
/// English; [`EmploymentStatus::normalize`] maps them onto this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Working normally; the only status eligible for the benefit.
    Active,
    /// On leave of absence ("afastado").
    OnLeave,
    /// Employment terminated ("demitido", "desligado").
    Terminated,
    /// Posted abroad ("exterior").
    Abroad,
}

impl EmploymentStatus {
    /// Normalizes a free-text status value against the controlled vocabulary.
    ///
    /// Matching is a case-insensitive substring test over Portuguese and
    /// English forms, so "DESC. SITUACAO: Afastado por doença" still lands on
    /// [`EmploymentStatus::OnLeave`]. Unmatched non-blank values default to
    /// [`EmploymentStatus::Active`]; third-party spreadsheets are of
    /// uncertain quality and the pipeline favors completion over failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use voucher_engine::models::EmploymentStatus;
    ///
    /// assert_eq!(EmploymentStatus::normalize("Afastado"), EmploymentStatus::OnLeave);
    /// assert_eq!(EmploymentStatus::normalize("DEMITIDO"), EmploymentStatus::Terminated);
    /// assert_eq!(EmploymentStatus::normalize("Exterior"), EmploymentStatus::Abroad);
    /// assert_eq!(EmploymentStatus::normalize("Trabalhando"), EmploymentStatus::Active);
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let folded = raw.to_lowercase();

        // Fixed priority: leave, termination, abroad, then the active default.
        const ON_LEAVE: &[&str] = &["afastad", "licen", "on leave", "on-leave", "leave"];
        const TERMINATED: &[&str] = &["demitid", "desligad", "terminat", "dismissed"];
        const ABROAD: &[&str] = &["exterior", "abroad", "expatriad", "overseas"];

        if ON_LEAVE.iter().any(|needle| folded.contains(needle)) {
            EmploymentStatus::OnLeave
        } else if TERMINATED.iter().any(|needle| folded.contains(needle)) {
            EmploymentStatus::Terminated
        } else if ABROAD.iter().any(|needle| folded.contains(needle)) {
            EmploymentStatus::Abroad
        } else {
            EmploymentStatus::Active
        }
    }
}

impl Default for EmploymentStatus {
    fn default() -> Self {
        EmploymentStatus::Active
    }
}

/// Canonical employee record after unification.
///
/// Within a unified set, `employee_id` is unique: duplicate rows are merged
/// field by field with the later-seen source winning populated fields.
///
/// # Example
///
/// ```
/// use voucher_engine::models::{EmployeeRecord, EmploymentStatus};
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord {
///     employee_id: "1001".to_string(),
///     name: Some("Ana Souza".to_string()),
///     role: Some("Analista".to_string()),
///     status: EmploymentStatus::Active,
///     union_region: Some("SP".to_string()),
///     base_value: Some(Decimal::new(50000, 2)),
/// };
/// assert_eq!(record.employee_id, "1001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier, the deduplication key.
    pub employee_id: String,
    /// Display name, when any source supplied one.
    pub name: Option<String>,
    /// Job title/category string, when any source supplied one.
    pub role: Option<String>,
    /// Normalized employment status.
    #[serde(default)]
    pub status: EmploymentStatus,
    /// Regional union code (e.g., "SP"), or unknown.
    pub union_region: Option<String>,
    /// Pre-adjustment benefit amount; absent when no source supplied one.
    pub base_value: Option<Decimal>,
}
