use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One step of a nested property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathKey {
    Key(String),
    Index(usize),
}

impl PathKey {
    #[must_use]
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }
}

/// Dynamic value tree carried by dataset rows, property defaults, persisted
/// overrides, and instance-graph properties.
///
/// Ordered records keep serialization deterministic, which the dataset
/// fingerprint depends on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Sequence(Vec<Value>),
    Record(IndexMap<String, Value>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Textual form of a scalar, or `None` for null and container values.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(format!("{number}")),
            Self::Bool(flag) => Some(format!("{flag}")),
            Self::Null | Self::Sequence(_) | Self::Record(_) => None,
        }
    }

    /// Writes `value` at `path`, creating intermediate containers as needed.
    ///
    /// A key step turns a non-record intermediate into a record; an index
    /// step turns a non-sequence intermediate into a sequence padded with
    /// nulls up to the index. An empty path replaces the whole value.
    pub fn set_field(&mut self, path: &[PathKey], value: Value) {
        let Some((step, rest)) = path.split_first() else {
            *self = value;
            return;
        };

        match step {
            PathKey::Key(key) => {
                if !matches!(self, Self::Record(_)) {
                    *self = Self::Record(IndexMap::new());
                }
                if let Self::Record(fields) = self {
                    fields.entry(key.clone()).or_default().set_field(rest, value);
                }
            }
            PathKey::Index(index) => {
                if !matches!(self, Self::Sequence(_)) {
                    *self = Self::Sequence(Vec::new());
                }
                if let Self::Sequence(items) = self {
                    if items.len() <= *index {
                        items.resize(index + 1, Self::Null);
                    }
                    items[*index].set_field(rest, value);
                }
            }
        }
    }

    /// Reads the value at `path`, or `None` when any step is absent.
    #[must_use]
    pub fn get_field(&self, path: &[PathKey]) -> Option<&Value> {
        let Some((step, rest)) = path.split_first() else {
            return Some(self);
        };
        match (step, self) {
            (PathKey::Key(key), Self::Record(fields)) => fields.get(key)?.get_field(rest),
            (PathKey::Index(index), Self::Sequence(items)) => items.get(*index)?.get_field(rest),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{PathKey, Value};

    #[test]
    fn set_field_with_empty_path_replaces_whole_value() {
        let mut value = Value::from(1.0);
        value.set_field(&[], Value::from("replaced"));
        assert_eq!(value, Value::from("replaced"));
    }

    #[test]
    fn set_field_creates_intermediate_records() {
        let mut value = Value::Null;
        value.set_field(
            &[PathKey::key("outer"), PathKey::key("inner")],
            Value::from(4.0),
        );
        assert_eq!(
            value.get_field(&[PathKey::key("outer"), PathKey::key("inner")]),
            Some(&Value::from(4.0))
        );
    }

    #[test]
    fn set_field_keeps_sibling_fields() {
        let mut value = Value::Null;
        value.set_field(&[PathKey::key("kept")], Value::from(true));
        value.set_field(&[PathKey::key("written")], Value::from(2.0));
        assert_eq!(value.get_field(&[PathKey::key("kept")]), Some(&Value::from(true)));
        assert_eq!(value.get_field(&[PathKey::key("written")]), Some(&Value::from(2.0)));
    }

    #[test]
    fn set_field_pads_sequences_with_nulls() {
        let mut value = Value::Null;
        value.set_field(&[PathKey::Index(2)], Value::from("third"));
        assert_eq!(value.get_field(&[PathKey::Index(0)]), Some(&Value::Null));
        assert_eq!(value.get_field(&[PathKey::Index(1)]), Some(&Value::Null));
        assert_eq!(value.get_field(&[PathKey::Index(2)]), Some(&Value::from("third")));
    }

    #[test]
    fn set_field_replaces_scalar_intermediate_with_container() {
        let mut value = Value::from("scalar");
        value.set_field(&[PathKey::key("field")], Value::from(1.0));
        assert_eq!(value.get_field(&[PathKey::key("field")]), Some(&Value::from(1.0)));
    }

    #[test]
    fn scalar_coercion_to_text() {
        assert_eq!(Value::from(10.0).to_text().as_deref(), Some("10"));
        assert_eq!(Value::from(true).to_text().as_deref(), Some("true"));
        assert_eq!(Value::from("abc").to_text().as_deref(), Some("abc"));
        assert_eq!(Value::Null.to_text(), None);
    }
}
