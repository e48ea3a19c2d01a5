use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Value;

/// One property-pane descriptor answered back to the host.
///
/// The selector stays empty: properties are scoped to the whole visual, not
/// to individual data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectInstanceDescriptor {
    pub object_name: String,
    pub properties: IndexMap<String, Value>,
    pub selector: Option<String>,
}
