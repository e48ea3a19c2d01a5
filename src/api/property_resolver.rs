//! Resolves declarative property values from defaults and host overrides.

use indexmap::IndexMap;

use crate::core::template::ChartTemplate;
use crate::core::Value;

/// Property name → current value, always fully populated: defaults fill any
/// gap, so a lookup by a declared name never misses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedProperties {
    values: IndexMap<String, Value>,
}

impl ResolvedProperties {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    #[must_use]
    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Seeds every declared property with its default over all object ids, then
/// overlays stored overrides.
///
/// An override replaces the seeded default only when a value is actually
/// stored under the property name; an absent key keeps the default. Never
/// fails: no override data at all yields pure defaults.
#[must_use]
pub fn resolve_properties(
    template: &ChartTemplate,
    overrides: Option<&IndexMap<String, Value>>,
) -> ResolvedProperties {
    let mut values = IndexMap::new();
    for (_object_id, declaration) in template.declarations() {
        values.insert(declaration.name.clone(), declaration.default.clone());
    }

    if let Some(overrides) = overrides {
        for (_object_id, declaration) in template.declarations() {
            if let Some(stored) = overrides.get(&declaration.name) {
                values.insert(declaration.name.clone(), stored.clone());
            }
        }
    }

    ResolvedProperties { values }
}
