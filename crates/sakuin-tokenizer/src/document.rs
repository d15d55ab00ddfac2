//! Field access for indexable documents

use serde_json::Value;

/// A record the index can tokenize
///
/// The index does not interpret fields beyond "string or list of strings".
/// Implementors decide how a field name maps onto their own layout.
pub trait Document {
    /// Stable unique identifier, `None` when the record has none
    fn id(&self) -> Option<String>;

    /// Raw text values of a field
    ///
    /// A scalar field yields one value, a list field yields one value per
    /// element. Missing or non-text fields yield nothing.
    fn field_values(&self, field: &str) -> Vec<&str>;
}

impl Document for Value {
    fn id(&self) -> Option<String> {
        match self.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn field_values(&self, field: &str) -> Vec<&str> {
        match self.get(field) {
            Some(Value::String(s)) => vec![s.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}
