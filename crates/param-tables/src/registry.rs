//! Declarative parameter table loading.
//!
//! Generated tables run to hundreds of entries; they are kept as YAML
//! resources and loaded into immutable [`ParameterTable`]s at startup
//! instead of being hand-written construction code. The standard authority
//! table is loaded once per process and shared read-only.
//!
//! Table file shape:
//!
//! ```yaml
//! table: "WMO GRIB2 standard"
//! parameters:
//!   - discipline: 0
//!     category: 0
//!     number: 0
//!     name: Temperature
//!     unit: K
//!     abbrev: TMP
//!     description: Air temperature
//!     fill: -9999.0      # optional
//!     missing: 9.999e20  # optional, NaN when absent
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::Deserialize;
use tracing::{debug, error};

use crate::error::TableError;
use crate::parameter::Parameter;
use crate::table::ParameterTable;

/// File name of the standard authority table inside the tables directory.
const STANDARD_TABLE_FILE: &str = "wmo.yaml";

#[derive(Debug, Deserialize)]
struct TableFile {
    table: String,
    parameters: Vec<ParameterRecord>,
}

#[derive(Debug, Deserialize)]
struct ParameterRecord {
    discipline: u8,
    category: u8,
    number: u8,
    name: String,
    unit: String,
    #[serde(default)]
    abbrev: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    fill: Option<f32>,
    #[serde(default)]
    missing: Option<f32>,
}

/// Get the tables directory path.
///
/// Checks the TABLES_DIR environment variable first, falls back to
/// "config/tables".
pub fn tables_dir() -> PathBuf {
    if let Ok(dir) = env::var("TABLES_DIR") {
        PathBuf::from(dir)
    } else {
        PathBuf::from("config/tables")
    }
}

/// Load a parameter table from a YAML file.
///
/// Absent `fill` becomes "not specified" (`None`); absent `missing`
/// becomes the NaN sentinel. A duplicate code triple in one document is a
/// definition error and fails the load.
pub fn load_table(path: &Path) -> Result<ParameterTable, TableError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        error!(
            path = ?path,
            error = %e,
            "CRITICAL: Parameter table file could not be read"
        );
        TableError::from(e)
    })?;

    let file: TableFile = serde_yaml::from_str(&contents).map_err(|e| {
        error!(path = ?path, error = %e, "CRITICAL: Invalid parameter table YAML");
        TableError::InvalidConfig(format!("Invalid YAML in {:?}: {}", path, e))
    })?;

    let mut table = ParameterTable::new(&file.table);
    for rec in file.parameters {
        let param = Parameter::new(
            rec.discipline,
            rec.category,
            rec.number,
            &rec.name,
            &rec.unit,
            &rec.abbrev,
            &rec.description,
            rec.fill,
            rec.missing.unwrap_or(f32::NAN),
        );
        table.insert(param).map_err(|e| {
            error!(path = ?path, error = %e, "CRITICAL: Parameter table defines a code twice");
            e
        })?;
    }

    debug!(
        table = %table.name(),
        parameters = table.len(),
        path = ?path,
        "Loaded parameter table"
    );
    Ok(table)
}

/// The process-wide standard authority table, loaded once from
/// `<tables_dir>/wmo.yaml` and shared read-only.
pub fn standard_table() -> Result<Arc<ParameterTable>, TableError> {
    static STANDARD: OnceLock<Arc<ParameterTable>> = OnceLock::new();
    if let Some(table) = STANDARD.get() {
        return Ok(table.clone());
    }
    let loaded = Arc::new(load_table(&tables_dir().join(STANDARD_TABLE_FILE))?);
    Ok(STANDARD.get_or_init(|| loaded).clone())
}
