//! Request types for the voucher engine API.
//!
//! This module defines the JSON request structures for the `/process`
//! endpoint.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::RawTable;

/// Request body for the `/process` endpoint.
///
/// Carries one batch: the parsed source tables, in the order that decides
/// which duplicate wins, plus an optional override of the union adjustment
/// table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Parsed source tables in processing order.
    pub sources: Vec<SourceTableRequest>,
    /// Optional region-code-to-amount override; when absent the configured
    /// table is used.
    #[serde(default)]
    pub union_adjustments: Option<HashMap<String, Decimal>>,
}

/// One parsed source table in a process request.
///
/// Cell values may arrive as JSON strings, numbers, booleans or null,
/// depending on how the upstream parser typed the spreadsheet; they are all
/// coerced to cell text before unification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTableRequest {
    /// The source file name, used in error reporting.
    pub name: String,
    /// Ordered rows mapping raw column label to raw cell value.
    pub rows: Vec<HashMap<String, Value>>,
}

/// Coerces one JSON cell value to raw cell text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

impl From<SourceTableRequest> for RawTable {
    fn from(req: SourceTableRequest) -> Self {
        let rows = req
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(label, value)| (label.clone(), cell_text(value)))
                    .collect()
            })
            .collect();
        RawTable::new(req.name, rows)
    }
}
