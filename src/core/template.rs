use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::value::{PathKey, Value};
use crate::error::{VisualError, VisualResult};

/// Kind of data a template slot consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Categorical,
    Numeric,
}

/// Named logical input the template requires, bound to one host data role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSlot {
    pub name: String,
    /// Role name the host's field wells expose for this slot.
    pub role: String,
    pub kind: SlotKind,
}

impl DataSlot {
    #[must_use]
    pub fn categorical(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            kind: SlotKind::Categorical,
        }
    }

    #[must_use]
    pub fn numeric(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            kind: SlotKind::Numeric,
        }
    }
}

/// Named table the template instantiates against the projected dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRequirement {
    pub name: String,
}

/// How a resolved property value lands in the instance graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PropertyTarget {
    /// Overwrites the object's attribute binding with a literal value.
    Attribute { attribute: String },
    /// Overwrites the named property, or a nested field inside it when
    /// `fields` is non-empty.
    Property {
        property: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<PathKey>,
    },
}

/// Declarative property owned by exactly one template object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    pub name: String,
    pub default: Value,
    #[serde(flatten)]
    pub target: PropertyTarget,
}

impl PropertyDeclaration {
    #[must_use]
    pub fn attribute(
        name: impl Into<String>,
        default: impl Into<Value>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            target: PropertyTarget::Attribute {
                attribute: attribute.into(),
            },
        }
    }

    #[must_use]
    pub fn property(
        name: impl Into<String>,
        default: impl Into<Value>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            target: PropertyTarget::Property {
                property: property.into(),
                fields: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn nested_property(
        name: impl Into<String>,
        default: impl Into<Value>,
        property: impl Into<String>,
        fields: Vec<PathKey>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            target: PropertyTarget::Property {
                property: property.into(),
                fields,
            },
        }
    }
}

/// Static chart template descriptor. Immutable after construction and shared
/// read-only across updates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTemplate {
    #[serde(default)]
    pub data_slots: Vec<DataSlot>,
    #[serde(default)]
    pub tables: Vec<TableRequirement>,
    /// Object id → ordered property declarations owned by that object.
    #[serde(default)]
    pub properties: IndexMap<String, Vec<PropertyDeclaration>>,
}

impl ChartTemplate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slot(mut self, slot: DataSlot) -> Self {
        self.data_slots.push(slot);
        self
    }

    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>) -> Self {
        self.tables.push(TableRequirement { name: name.into() });
        self
    }

    #[must_use]
    pub fn with_property(
        mut self,
        object_id: impl Into<String>,
        declaration: PropertyDeclaration,
    ) -> Self {
        self.properties
            .entry(object_id.into())
            .or_default()
            .push(declaration);
        self
    }

    /// Every declaration paired with its owning object id, in template order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &PropertyDeclaration)> {
        self.properties.iter().flat_map(|(object_id, declarations)| {
            declarations
                .iter()
                .map(move |declaration| (object_id.as_str(), declaration))
        })
    }

    pub fn object_ids(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Loads a template from its JSON descriptor form.
    pub fn from_json_str(input: &str) -> VisualResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| VisualError::InvalidTemplate(format!("failed to parse template json: {e}")))
    }

    pub fn to_json_pretty(&self) -> VisualResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VisualError::InvalidTemplate(format!("failed to serialize template: {e}")))
    }
}
