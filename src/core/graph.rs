use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::value::Value;

/// Binding attached to one attribute of a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeBinding {
    /// Direct literal value binding.
    Value { value: Value },
    /// Data-driven binding resolved against a dataset column.
    Column { column: String },
}

impl AttributeBinding {
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Value {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn column(column: impl Into<String>) -> Self {
        Self::Column {
            column: column.into(),
        }
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Value { .. })
    }
}

/// One addressable node inside an instantiated chart's object graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub mappings: IndexMap<String, AttributeBinding>,
    pub properties: IndexMap<String, Value>,
}

impl GraphNode {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mappings: IndexMap::new(),
            properties: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_mapping(mut self, attribute: impl Into<String>, binding: AttributeBinding) -> Self {
        self.mappings.insert(attribute.into(), binding);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }
}

/// Mutable object graph of one chart instance, addressable by object id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectGraph {
    nodes: Vec<GraphNode>,
}

impl ObjectGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    #[must_use]
    pub fn with_node(mut self, node: GraphNode) -> Self {
        self.push(node);
        self
    }

    #[must_use]
    pub fn find(&self, object_id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == object_id)
    }

    pub fn find_mut(&mut self, object_id: &str) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|node| node.id == object_id)
    }

    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }
}
