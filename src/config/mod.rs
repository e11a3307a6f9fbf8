//! Configuration for the voucher engine.
//!
//! Provides the injectable union adjustment table and its YAML loader.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::UnionTable;
