//! Source unification.
//!
//! This module merges a sequence of parsed source tables into one canonical,
//! deduplicated employee record set. Column labels are standardized via the
//! synonym table, rows are concatenated in the given source order, and
//! duplicate identifiers are merged field by field with the later-processed
//! source winning every field it actually populates ("most complete wins").

mod columns;
mod values;

pub use columns::{CanonicalColumn, normalize_label, resolve_column};
pub use values::{is_blank, parse_money};

use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, EmploymentStatus, RawTable};

/// Accumulator for one identifier while sources are being merged.
///
/// Every field is optional so a blank cell in a later source can be told
/// apart from an explicit value and never blanks out earlier data.
#[derive(Debug, Default)]
struct PartialRecord {
    name: Option<String>,
    role: Option<String>,
    status: Option<EmploymentStatus>,
    union_region: Option<String>,
    base_value: Option<Decimal>,
}

impl PartialRecord {
    /// Applies the populated fields of one row over this record.
    fn apply(&mut self, fields: RowFields) {
        if fields.name.is_some() {
            self.name = fields.name;
        }
        if fields.role.is_some() {
            self.role = fields.role;
        }
        if fields.status.is_some() {
            self.status = fields.status;
        }
        if fields.union_region.is_some() {
            self.union_region = fields.union_region;
        }
        if fields.base_value.is_some() {
            self.base_value = fields.base_value;
        }
    }

    fn finalize(self, employee_id: String) -> EmployeeRecord {
        EmployeeRecord {
            employee_id,
            name: self.name,
            role: self.role,
            status: self.status.unwrap_or_default(),
            union_region: self.union_region,
            base_value: self.base_value,
        }
    }
}

/// The canonical fields extracted from one raw row.
#[derive(Debug, Default)]
struct RowFields {
    employee_id: Option<String>,
    name: Option<String>,
    role: Option<String>,
    status: Option<EmploymentStatus>,
    union_region: Option<String>,
    base_value: Option<Decimal>,
}

/// Extracts canonical fields from a raw row.
///
/// Labels are visited in sorted order so that two labels resolving to the
/// same canonical field pick a deterministic winner regardless of map
/// iteration order. Blank cells and unrecognized columns are dropped.
fn extract_fields(row: &HashMap<String, String>) -> RowFields {
    let mut labels: Vec<&String> = row.keys().collect();
    labels.sort();

    let mut fields = RowFields::default();
    for label in labels {
        let Some(column) = resolve_column(label) else {
            continue;
        };
        let raw = &row[label];
        if is_blank(raw) {
            continue;
        }
        let value = raw.trim();

        match column {
            CanonicalColumn::EmployeeId => {
                fields.employee_id.get_or_insert_with(|| value.to_string());
            }
            CanonicalColumn::Name => {
                fields.name.get_or_insert_with(|| value.to_string());
            }
            CanonicalColumn::Role => {
                fields.role.get_or_insert_with(|| value.to_string());
            }
            CanonicalColumn::Status => {
                fields
                    .status
                    .get_or_insert_with(|| EmploymentStatus::normalize(value));
            }
            CanonicalColumn::UnionRegion => {
                fields
                    .union_region
                    .get_or_insert_with(|| value.to_uppercase());
            }
            CanonicalColumn::BaseValue => {
                if fields.base_value.is_none() {
                    fields.base_value = parse_money(value);
                }
            }
        }
    }
    fields
}

/// Returns true if any row of the source carries a resolvable identifier
/// column, blank or not.
fn has_identifier_column(source: &RawTable) -> bool {
    source.rows.iter().any(|row| {
        row.keys()
            .any(|label| resolve_column(label) == Some(CanonicalColumn::EmployeeId))
    })
}

/// Unifies parsed source tables into one deduplicated employee record set.
///
/// Sources are processed in the given order; that order is the external
/// contract that decides which duplicate wins, so callers must supply a
/// deterministic sequence (e.g., file name sort). The returned records keep
/// first-seen insertion order of identifiers.
///
/// # Errors
///
/// Returns [`EngineError::SchemaError`] when a non-empty source has no
/// resolvable identifier column; nothing is partially unified in that case.
/// Sources with zero rows are skipped. Rows whose identifier cell is blank
/// are dropped, since they cannot participate in deduplication.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use voucher_engine::models::RawTable;
/// use voucher_engine::unify::unify;
///
/// let table = RawTable::new(
///     "ativos.csv",
///     vec![HashMap::from([
///         ("MATRICULA".to_string(), "1001".to_string()),
///         ("Nome".to_string(), "Ana Souza".to_string()),
///     ])],
/// );
///
/// let records = unify(&[table]).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].employee_id, "1001");
/// ```
pub fn unify(sources: &[RawTable]) -> EngineResult<Vec<EmployeeRecord>> {
    let mut merged: IndexMap<String, PartialRecord> = IndexMap::new();

    for source in sources {
        if source.is_empty() {
            continue;
        }
        if !has_identifier_column(source) {
            return Err(EngineError::SchemaError {
                source: source.name.clone(),
            });
        }

        for row in &source.rows {
            let fields = extract_fields(row);
            let Some(employee_id) = fields.employee_id.clone() else {
                continue;
            };
            merged.entry(employee_id).or_default().apply(fields);
        }
    }

    Ok(merged
        .into_iter()
        .map(|(employee_id, partial)| partial.finalize(employee_id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn table(name: &str, rows: Vec<HashMap<String, String>>) -> RawTable {
        RawTable::new(name, rows)
    }

    #[test]
    fn test_unify_single_source() {
        let sources = vec![table(
            "ativos.csv",
            vec![row(&[
                ("MATRICULA", "1001"),
                ("Nome", "Ana Souza"),
                ("TITULO DO CARGO", "Analista"),
                ("DESC. SITUACAO", "Ativo"),
                ("Sindicato", "SP"),
                ("VALOR_BENEFICIO_BASE", "500.00"),
            ])],
        )];

        let records = unify(&sources).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.employee_id, "1001");
        assert_eq!(record.name.as_deref(), Some("Ana Souza"));
        assert_eq!(record.role.as_deref(), Some("Analista"));
        assert_eq!(record.status, EmploymentStatus::Active);
        assert_eq!(record.union_region.as_deref(), Some("SP"));
        assert_eq!(record.base_value, Some(dec("500.00")));
    }

    #[test]
    fn test_unify_empty_input_yields_empty_set() {
        let records = unify(&[]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_source_without_identifier_fails_with_schema_error() {
        let sources = vec![table(
            "sem_id.csv",
            vec![row(&[("Nome", "Ana"), ("Sindicato", "SP")])],
        )];

        match unify(&sources) {
            Err(EngineError::SchemaError { source }) => assert_eq!(source, "sem_id.csv"),
            other => panic!("Expected SchemaError, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_error_does_not_partially_unify() {
        let sources = vec![
            table("ok.csv", vec![row(&[("MATRICULA", "1001")])]),
            table("sem_id.csv", vec![row(&[("Nome", "Ana")])]),
        ];

        assert!(unify(&sources).is_err());
    }

    #[test]
    fn test_source_with_zero_rows_is_skipped() {
        let sources = vec![
            table("vazio.csv", vec![]),
            table("ok.csv", vec![row(&[("MATRICULA", "1001")])]),
        ];

        let records = unify(&sources).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_row_with_blank_identifier_is_dropped() {
        let sources = vec![table(
            "parcial.csv",
            vec![
                row(&[("MATRICULA", ""), ("Nome", "Sem Matricula")]),
                row(&[("MATRICULA", "1002"), ("Nome", "Bruno Lima")]),
            ],
        )];

        let records = unify(&sources).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_id, "1002");
    }

    #[test]
    fn test_dedup_merges_disjoint_fields() {
        let sources = vec![
            table(
                "cadastro.csv",
                vec![row(&[("MATRICULA", "1001"), ("Nome", "Ana Souza")])],
            ),
            table(
                "beneficios.csv",
                vec![row(&[
                    ("MATRICULA", "1001"),
                    ("Sindicato", "RJ"),
                    ("VALOR_BENEFICIO_BASE", "450.00"),
                ])],
            ),
        ];

        let records = unify(&sources).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.name.as_deref(), Some("Ana Souza"));
        assert_eq!(record.union_region.as_deref(), Some("RJ"));
        assert_eq!(record.base_value, Some(dec("450.00")));
    }

    #[test]
    fn test_dedup_later_source_overrides_populated_fields() {
        let sources = vec![
            table(
                "janeiro.csv",
                vec![row(&[("MATRICULA", "1001"), ("Sindicato", "SP")])],
            ),
            table(
                "fevereiro.csv",
                vec![row(&[("MATRICULA", "1001"), ("Sindicato", "RS")])],
            ),
        ];

        let records = unify(&sources).unwrap();
        assert_eq!(records[0].union_region.as_deref(), Some("RS"));
    }

    #[test]
    fn test_dedup_blank_cell_does_not_blank_earlier_value() {
        let sources = vec![
            table(
                "completo.csv",
                vec![row(&[
                    ("MATRICULA", "1001"),
                    ("Nome", "Ana Souza"),
                    ("VALOR_BENEFICIO_BASE", "500.00"),
                ])],
            ),
            table(
                "incompleto.csv",
                vec![row(&[
                    ("MATRICULA", "1001"),
                    ("Nome", ""),
                    ("VALOR_BENEFICIO_BASE", "nan"),
                    ("DESC. SITUACAO", "Afastado"),
                ])],
            ),
        ];

        let records = unify(&sources).unwrap();
        let record = &records[0];
        assert_eq!(record.name.as_deref(), Some("Ana Souza"));
        assert_eq!(record.base_value, Some(dec("500.00")));
        assert_eq!(record.status, EmploymentStatus::OnLeave);
    }

    #[test]
    fn test_output_preserves_first_seen_order() {
        let sources = vec![
            table(
                "a.csv",
                vec![
                    row(&[("MATRICULA", "3")]),
                    row(&[("MATRICULA", "1")]),
                ],
            ),
            table(
                "b.csv",
                vec![
                    row(&[("MATRICULA", "2")]),
                    // Duplicate must not move "1" to the back.
                    row(&[("MATRICULA", "1"), ("Sindicato", "PR")]),
                ],
            ),
        ];

        let records = unify(&sources).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(records[1].union_region.as_deref(), Some("PR"));
    }

    #[test]
    fn test_unrecognized_columns_are_dropped_not_errors() {
        let sources = vec![table(
            "extra.csv",
            vec![row(&[
                ("MATRICULA", "1001"),
                ("EMPRESA", "ACME"),
                ("DATA ADMISSAO", "2020-01-01"),
            ])],
        )];

        let records = unify(&sources).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].name.is_none());
    }

    #[test]
    fn test_unknown_status_text_defaults_to_active() {
        let sources = vec![table(
            "status.csv",
            vec![row(&[("MATRICULA", "1001"), ("DESC. SITUACAO", "Ferias???")])],
        )];

        let records = unify(&sources).unwrap();
        assert_eq!(records[0].status, EmploymentStatus::Active);
    }

    #[test]
    fn test_unparseable_base_value_degrades_to_absent() {
        let sources = vec![table(
            "valores.csv",
            vec![row(&[
                ("MATRICULA", "1001"),
                ("VALOR_BENEFICIO_BASE", "a combinar"),
            ])],
        )];

        let records = unify(&sources).unwrap();
        assert_eq!(records[0].base_value, None);
    }

    #[test]
    fn test_region_code_is_uppercased() {
        let sources = vec![table(
            "regioes.csv",
            vec![row(&[("MATRICULA", "1001"), ("Sindicato", "sp")])],
        )];

        let records = unify(&sources).unwrap();
        assert_eq!(records[0].union_region.as_deref(), Some("SP"));
    }

    #[test]
    fn test_unify_is_deterministic() {
        let sources = vec![
            table(
                "a.csv",
                vec![row(&[
                    ("MATRICULA", "1001"),
                    ("Nome", "Ana"),
                    ("Sindicato", "SP"),
                ])],
            ),
            table(
                "b.csv",
                vec![row(&[("MATRICULA", "1002"), ("Sindicato", "RJ")])],
            ),
        ];

        let first = unify(&sources).unwrap();
        let second = unify(&sources).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let sources = vec![table("a.csv", vec![row(&[("MATRICULA", "1001")])])];
        let snapshot = sources.clone();

        let _ = unify(&sources).unwrap();
        assert_eq!(sources, snapshot);
    }
}
