//! Error types for the voucher engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only schema resolution and configuration loading can fail; value-level
//! problems in source spreadsheets (unparseable amounts, unknown status
//! text) are recovered with documented defaults and never become errors.

use std::fmt;

/// The main error type for the voucher engine.
///
/// # Example
///
/// ```
/// use voucher_engine::error::EngineError;
///
/// let error = EngineError::SchemaError {
///     source: "folha_abril.csv".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Source 'folha_abril.csv' has no resolvable employee identifier column"
/// );
/// ```
#[derive(Debug)]
pub enum EngineError {
    /// A source table has no column that resolves to the employee identifier.
    ///
    /// This is the only condition that aborts a pipeline run; the batch is
    /// rejected wholesale rather than partially unified.
    SchemaError {
        /// The name of the offending source table.
        source: String,
    },

    /// Configuration file was not found at the specified path.
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

// `thiserror` cannot derive this enum: it treats any field named `source`
// as the error's `Error::source()`, which requires the field to implement
// `std::error::Error` — here it is a plain `String` naming the offending
// table. Display and Error are implemented by hand instead.
impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SchemaError { source } => write!(
                f,
                "Source '{source}' has no resolvable employee identifier column"
            ),
            EngineError::ConfigNotFound { path } => {
                write!(f, "Configuration file not found: {path}")
            }
            EngineError::ConfigParseError { path, message } => write!(
                f,
                "Failed to parse configuration file '{path}': {message}"
            ),
        }
    }
}

impl std::error::Error for EngineError {}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_displays_source_name() {
        let error = EngineError::SchemaError {
            source: "planilha_rj.xlsx".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Source 'planilha_rj.xlsx' has no resolvable employee identifier column"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/unions.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/unions.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_schema_error() -> EngineResult<()> {
            Err(EngineError::SchemaError {
                source: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_schema_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
