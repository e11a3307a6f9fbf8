//! Eligibility classification.
//!
//! A pure function per record, evaluated in fixed priority order with the
//! first match winning: excluded role categories first, then excluded
//! statuses. Records passing every rule are eligible.

use crate::models::{EmployeeRecord, EmploymentStatus, IneligibilityReason};
use crate::unify::normalize_label;

/// Word forms per excluded role category, in normalized label form.
///
/// Matching is whole-word over the normalized role text. Word boundaries
/// keep "Analista Internacional" out of the intern category and "Assistente
/// de Diretoria" out of the director category.
const INTERN_WORDS: &[&str] = &["estagiario", "estagiaria", "estagiarios", "intern"];
const APPRENTICE_WORDS: &[&str] = &["aprendiz", "aprendizes", "apprentice"];
const DIRECTOR_WORDS: &[&str] = &["diretor", "diretora", "diretores", "director"];

fn role_has_word(normalized_role: &str, words: &[&str]) -> bool {
    normalized_role
        .split_whitespace()
        .any(|w| words.contains(&w))
}

/// Classifies one record, returning the exclusion reason or `None` when the
/// employee is eligible.
///
/// Rule priority, first match wins:
/// 1. role matches intern, apprentice, or director;
/// 2. status on-leave;
/// 3. status terminated;
/// 4. status abroad.
///
/// # Examples
///
/// ```
/// use voucher_engine::benefit::classify;
/// use voucher_engine::models::{EmployeeRecord, EmploymentStatus, IneligibilityReason};
///
/// let record = EmployeeRecord {
///     employee_id: "1001".to_string(),
///     name: None,
///     role: Some("Estagiário".to_string()),
///     status: EmploymentStatus::OnLeave,
///     union_region: None,
///     base_value: None,
/// };
///
/// // Role rules precede status rules.
/// assert_eq!(classify(&record), Some(IneligibilityReason::Intern));
/// ```
pub fn classify(record: &EmployeeRecord) -> Option<IneligibilityReason> {
    if let Some(role) = record.role.as_deref() {
        let normalized = normalize_label(role);
        if role_has_word(&normalized, INTERN_WORDS) {
            return Some(IneligibilityReason::Intern);
        }
        if role_has_word(&normalized, APPRENTICE_WORDS) {
            return Some(IneligibilityReason::Apprentice);
        }
        if role_has_word(&normalized, DIRECTOR_WORDS) {
            return Some(IneligibilityReason::Director);
        }
    }

    match record.status {
        EmploymentStatus::OnLeave => Some(IneligibilityReason::OnLeave),
        EmploymentStatus::Terminated => Some(IneligibilityReason::Terminated),
        EmploymentStatus::Abroad => Some(IneligibilityReason::Abroad),
        EmploymentStatus::Active => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(role: Option<&str>, status: EmploymentStatus) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: "1001".to_string(),
            name: None,
            role: role.map(str::to_string),
            status,
            union_region: None,
            base_value: None,
        }
    }

    #[test]
    fn test_active_regular_role_is_eligible() {
        assert_eq!(
            classify(&record(Some("Analista"), EmploymentStatus::Active)),
            None
        );
    }

    #[test]
    fn test_missing_role_with_active_status_is_eligible() {
        assert_eq!(classify(&record(None, EmploymentStatus::Active)), None);
    }

    #[test]
    fn test_intern_roles_are_excluded() {
        for role in [
            "Estagiário",
            "ESTAGIARIA",
            "Intern",
            "Estagiário de Vendas",
        ] {
            assert_eq!(
                classify(&record(Some(role), EmploymentStatus::Active)),
                Some(IneligibilityReason::Intern),
                "role {:?} should classify as intern",
                role
            );
        }
    }

    #[test]
    fn test_apprentice_roles_are_excluded() {
        assert_eq!(
            classify(&record(Some("Aprendiz"), EmploymentStatus::Active)),
            Some(IneligibilityReason::Apprentice)
        );
        assert_eq!(
            classify(&record(Some("Jovem Aprendiz"), EmploymentStatus::Active)),
            Some(IneligibilityReason::Apprentice)
        );
        assert_eq!(
            classify(&record(Some("Apprentice"), EmploymentStatus::Active)),
            Some(IneligibilityReason::Apprentice)
        );
    }

    #[test]
    fn test_director_roles_are_excluded() {
        assert_eq!(
            classify(&record(Some("Diretor Financeiro"), EmploymentStatus::Active)),
            Some(IneligibilityReason::Director)
        );
        assert_eq!(
            classify(&record(Some("Diretora"), EmploymentStatus::Active)),
            Some(IneligibilityReason::Director)
        );
        assert_eq!(
            classify(&record(Some("Managing Director"), EmploymentStatus::Active)),
            Some(IneligibilityReason::Director)
        );
    }

    #[test]
    fn test_word_boundaries_prevent_false_positives() {
        assert_eq!(
            classify(&record(
                Some("Analista Internacional"),
                EmploymentStatus::Active
            )),
            None
        );
        assert_eq!(
            classify(&record(
                Some("Assistente de Diretoria"),
                EmploymentStatus::Active
            )),
            None
        );
    }

    #[test]
    fn test_status_exclusions() {
        assert_eq!(
            classify(&record(Some("Analista"), EmploymentStatus::OnLeave)),
            Some(IneligibilityReason::OnLeave)
        );
        assert_eq!(
            classify(&record(Some("Analista"), EmploymentStatus::Terminated)),
            Some(IneligibilityReason::Terminated)
        );
        assert_eq!(
            classify(&record(Some("Analista"), EmploymentStatus::Abroad)),
            Some(IneligibilityReason::Abroad)
        );
    }

    #[test]
    fn test_role_rule_precedes_status_rule() {
        // An intern who is also on leave reports as intern.
        assert_eq!(
            classify(&record(Some("Estagiário"), EmploymentStatus::OnLeave)),
            Some(IneligibilityReason::Intern)
        );
        // A director who was terminated reports as director.
        assert_eq!(
            classify(&record(Some("Diretor"), EmploymentStatus::Terminated)),
            Some(IneligibilityReason::Director)
        );
    }

    #[test]
    fn test_intern_precedes_director_within_role_rules() {
        assert_eq!(
            classify(&record(
                Some("Estagiário Diretor"),
                EmploymentStatus::Active
            )),
            Some(IneligibilityReason::Intern)
        );
    }
}
