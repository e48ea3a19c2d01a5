use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::template::SlotKind;
use crate::core::value::Value;
use crate::error::{VisualError, VisualResult};

/// Name given to every projected dataset.
pub const DATASET_NAME: &str = "Dataset";

/// Name of the single table every template table requirement binds to.
pub const DEFAULT_TABLE_NAME: &str = "default";

/// Column descriptor of a projected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: SlotKind,
}

/// One dataset row. The synthetic id is unique per row and survives row
/// drops without reindexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub values: IndexMap<String, Value>,
}

impl Row {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Row>,
}

/// Canonical row-oriented dataset produced by projection.
///
/// Invariant: every declared data slot has a non-null value in every retained
/// row; rows violating this are dropped by the projector, never nulled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub tables: Vec<DataTable>,
}

impl Dataset {
    #[must_use]
    pub fn default_table(&self) -> Option<&DataTable> {
        self.tables
            .iter()
            .find(|table| table.name == DEFAULT_TABLE_NAME)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.default_table().map_or(0, |table| table.rows.len())
    }

    /// Deterministic serialization of the dataset, compared for equality
    /// only and never persisted.
    pub fn fingerprint(&self) -> VisualResult<Fingerprint> {
        serde_json::to_string(self)
            .map(Fingerprint)
            .map_err(|e| VisualError::Fingerprint(e.to_string()))
    }
}

/// Content fingerprint of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
