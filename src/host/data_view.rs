use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Value;

/// Logical viewport requested by the host for one update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Primary category column of the host's categorical view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryColumn {
    #[serde(default)]
    pub values: Vec<Value>,
}

/// Source descriptor of one value series: role name → truthy flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesSource {
    #[serde(default)]
    pub roles: IndexMap<String, bool>,
}

/// One value series, row-aligned with the category column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueSeries {
    #[serde(default)]
    pub source: SeriesSource,
    #[serde(default)]
    pub values: Vec<Value>,
}

impl ValueSeries {
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.source.roles.get(role).copied().unwrap_or(false)
    }
}

/// Categorical shape of a host data view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoricalView {
    #[serde(default)]
    pub categories: Vec<CategoryColumn>,
    #[serde(default)]
    pub values: Vec<ValueSeries>,
}

/// Persisted per-group property overrides carried on the view metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewMetadata {
    #[serde(default)]
    pub objects: IndexMap<String, IndexMap<String, Value>>,
}

/// One data view of the host's current selection. The adapter never mutates
/// it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataView {
    #[serde(default)]
    pub categorical: Option<CategoricalView>,
    #[serde(default)]
    pub metadata: Option<ViewMetadata>,
}

/// Options passed by the host on every update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptions {
    pub viewport: Viewport,
    #[serde(default)]
    pub data_views: Vec<DataView>,
}

impl UpdateOptions {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            data_views: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_view(mut self, view: DataView) -> Self {
        self.data_views.push(view);
        self
    }

    #[must_use]
    pub fn primary_view(&self) -> Option<&DataView> {
        self.data_views.first()
    }

    /// Persisted overrides stored for one property group, if any.
    #[must_use]
    pub fn persisted_overrides(&self, group: &str) -> Option<&IndexMap<String, Value>> {
        self.primary_view()?.metadata.as_ref()?.objects.get(group)
    }
}
