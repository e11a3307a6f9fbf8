//! Raw source table model.
//!
//! A [`RawTable`] is one parsed source file as handed over by an external
//! extractor: an ordered sequence of rows, each row a mapping from the raw
//! column label to the raw cell text. It is ephemeral and only exists while
//! unification runs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One parsed tabular source prior to unification.
///
/// Archive extraction and per-file parsing are the caller's responsibility;
/// the engine only consumes the already-parsed rows. Column labels are kept
/// verbatim here and resolved against the synonym table during unification.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use voucher_engine::models::RawTable;
///
/// let table = RawTable {
///     name: "ativos.csv".to_string(),
///     rows: vec![HashMap::from([
///         ("MATRICULA".to_string(), "1001".to_string()),
///         ("Sindicato".to_string(), "SP".to_string()),
///     ])],
/// };
/// assert_eq!(table.rows.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// The source file name, used in error reporting and logging.
    pub name: String,
    /// Ordered rows; each row maps a raw column label to the raw cell text.
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    /// Creates a named table from pre-built rows.
    pub fn new(name: impl Into<String>, rows: Vec<HashMap<String, String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
