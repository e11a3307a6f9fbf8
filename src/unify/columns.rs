//! Column header standardization.
//!
//! Source spreadsheets name the same field many ways ("MATRICULA",
//! "Matrícula", " matricula "). This module folds raw header labels into a
//! normal form and resolves them against a fixed synonym table of canonical
//! fields. Unrecognized columns resolve to `None` and are dropped by the
//! unifier; the pipeline does best-effort unification, not strict schema
//! validation.

use serde::{Deserialize, Serialize};

/// Canonical fields a source column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalColumn {
    /// The unique employee identifier, required in every source.
    EmployeeId,
    /// Display name.
    Name,
    /// Job title/category.
    Role,
    /// Employment situation free text.
    Status,
    /// Regional union code.
    UnionRegion,
    /// Pre-adjustment benefit amount.
    BaseValue,
}

/// Synonyms per canonical field, in normalized label form.
///
/// Covers the headers the upstream extractors are known to emit, in both
/// Portuguese and English.
const SYNONYMS: &[(CanonicalColumn, &[&str])] = &[
    (
        CanonicalColumn::EmployeeId,
        &[
            "matricula",
            "id",
            "employee id",
            "id funcionario",
            "registro",
            "cadastro",
        ],
    ),
    (
        CanonicalColumn::Name,
        &[
            "nome",
            "name",
            "funcionario",
            "nome completo",
            "nome do funcionario",
            "employee name",
        ],
    ),
    (
        CanonicalColumn::Role,
        &[
            "cargo",
            "titulo do cargo",
            "titulo cargo",
            "descricao do cargo",
            "funcao",
            "role",
            "job title",
        ],
    ),
    (
        CanonicalColumn::Status,
        &[
            "desc situacao",
            "desc da situacao",
            "situacao",
            "situacao funcional",
            "status",
            "situation",
        ],
    ),
    (
        CanonicalColumn::UnionRegion,
        &[
            "sindicato",
            "uf sindicato",
            "union",
            "union region",
            "regiao",
            "uf",
            "estado",
        ],
    ),
    (
        CanonicalColumn::BaseValue,
        &[
            "valor beneficio base",
            "valor do beneficio",
            "valor beneficio",
            "valor base",
            "valor",
            "base value",
            "beneficio base",
        ],
    ),
];

/// Folds one character's common Latin accents to its ASCII base.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}

/// Normalizes a raw header label: lowercase, accents folded, every run of
/// non-alphanumeric characters collapsed to a single space, ends trimmed.
///
/// # Examples
///
/// ```
/// use voucher_engine::unify::normalize_label;
///
/// assert_eq!(normalize_label("  Matrícula "), "matricula");
/// assert_eq!(normalize_label("DESC. SITUACAO"), "desc situacao");
/// assert_eq!(normalize_label("VALOR_BENEFICIO_BASE"), "valor beneficio base");
/// ```
pub fn normalize_label(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.to_lowercase().chars().map(fold_accent) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Resolves a raw header label to its canonical field, if recognized.
///
/// # Examples
///
/// ```
/// use voucher_engine::unify::{resolve_column, CanonicalColumn};
///
/// assert_eq!(resolve_column("MATRICULA"), Some(CanonicalColumn::EmployeeId));
/// assert_eq!(resolve_column("Sindicato"), Some(CanonicalColumn::UnionRegion));
/// assert_eq!(resolve_column("EMPRESA"), None);
/// ```
pub fn resolve_column(raw_label: &str) -> Option<CanonicalColumn> {
    let normalized = normalize_label(raw_label);
    SYNONYMS
        .iter()
        .find(|(_, labels)| labels.contains(&normalized.as_str()))
        .map(|(column, _)| *column)
}
