//! JSON snapshot of an index, as produced by a host's declaration scanner.
//!
//! ```json
//! {
//!   "classes": [{ "name": "Dog", "super": "Animal" }],
//!   "fields": [{ "class": "Dog", "name": "breed", "types": ["string"] }],
//!   "methods": [{ "class": "Dog", "name": "bark", "params": ["times"] },
//!               { "class": "Dog", "name": "new", "static": true }]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defs::{ClassRecord, FieldDef, MethodDef};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read index snapshot {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse index snapshot {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSnapshot {
    #[serde(default)]
    pub classes: Vec<ClassRecord>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

impl IndexSnapshot {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "../tests/snapshot_tests.rs"]
mod tests;
