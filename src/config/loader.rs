//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the union
//! adjustment table from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::UnionTable;

/// Loads and provides access to the union adjustment configuration.
///
/// # File Format
///
/// ```text
/// # config/unions.yaml
/// adjustments:
///   SP: "50.00"
///   RJ: "70.00"
///   PR: "60.00"
///   RS: "80.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use voucher_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/unions.yaml").unwrap();
/// let table = loader.unions();
/// println!("Regions configured: {}", table.regions().count());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    unions: UnionTable,
}

impl ConfigLoader {
    /// Loads the union table from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read
    /// and [`EngineError::ConfigParseError`] if it is not valid YAML for
    /// the expected shape.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let unions: UnionTable =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { unions })
    }

    /// Wraps an already-built table, for tests and embedded defaults.
    pub fn from_table(unions: UnionTable) -> Self {
        Self { unions }
    }

    /// Returns the loaded union adjustment table.
    pub fn unions(&self) -> &UnionTable {
        &self.unions
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_table(UnionTable::default())
    }
}
