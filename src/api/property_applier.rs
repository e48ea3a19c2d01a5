//! Writes resolved property values into a live chart instance graph.

use tracing::trace;

use crate::core::graph::{AttributeBinding, ObjectGraph};
use crate::core::template::{ChartTemplate, PropertyTarget};
use crate::core::Value;
use crate::engine::TemplateEngine;
use crate::error::{VisualError, VisualResult};

use super::ResolvedProperties;

/// Applies every declared property to the instance graph, in declaration
/// order; later writes to the same target overwrite earlier ones.
///
/// The graph is assumed structurally aligned with the template that produced
/// the instance: a declaration whose object id has no node aborts the whole
/// update with [`VisualError::ObjectNotFound`].
pub fn apply_properties<E: TemplateEngine>(
    template: &ChartTemplate,
    engine: &E,
    graph: &mut ObjectGraph,
    resolved: &ResolvedProperties,
) -> VisualResult<()> {
    for (object_id, declarations) in &template.properties {
        for declaration in declarations {
            // a stored null means "no value", same as a missing key
            let value = match resolved.get(&declaration.name) {
                None | Some(Value::Null) => declaration.default.clone(),
                Some(stored) => stored.clone(),
            };

            let node = engine
                .find_object_by_id(graph, object_id)
                .ok_or_else(|| VisualError::ObjectNotFound {
                    object_id: object_id.clone(),
                })?;

            match &declaration.target {
                PropertyTarget::Attribute { attribute } => {
                    // replaces any prior binding kind, data-driven included
                    node.mappings
                        .insert(attribute.clone(), AttributeBinding::Value { value });
                }
                PropertyTarget::Property { property, fields } => {
                    if fields.is_empty() {
                        node.properties.insert(property.clone(), value);
                    } else {
                        node.properties
                            .entry(property.clone())
                            .or_default()
                            .set_field(fields, value);
                    }
                }
            }
            trace!(
                object_id = object_id.as_str(),
                property = declaration.name.as_str(),
                "applied property"
            );
        }
    }
    Ok(())
}
