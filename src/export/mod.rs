//! Export module
//!
//! Exports the address book in several formats:
//! - CSV: one row per contact (spreadsheet-compatible)
//! - JSON: machine-readable, with schema version
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, ContactExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
