//! Render context passed to template handles.

use serde::Serialize;
use serde_json::{Map, Value};

/// Variable map handed to a template at render time.
///
/// Backed by a `serde_json::Map` so it serializes into whichever context type
/// the chosen backend expects.  Widget rendering conventionally places the
/// widget description under the `widget` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    values: Map<String, Value>,
}

impl RenderContext {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under `key`, replacing any existing entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Insert a value (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying map, for backends that consume it directly.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

impl From<Map<String, Value>> for RenderContext {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, Value)> for RenderContext {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_and_get() {
        let mut ctx = RenderContext::new();
        ctx.insert("widget", json!({"name": "username"}));

        assert_eq!(
            ctx.get("widget").and_then(|w| w.get("name")),
            Some(&json!("username"))
        );
        assert!(ctx.get("missing").is_none());
    }

    #[test]
    fn builder_style_chains() {
        let ctx = RenderContext::new().with("a", 1).with("b", "two");
        assert_eq!(ctx.get("a"), Some(&json!(1)));
        assert_eq!(ctx.get("b"), Some(&json!("two")));
    }

    #[test]
    fn serializes_as_a_plain_object() {
        let ctx = RenderContext::new().with("name", "field");
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value, json!({"name": "field"}));
    }
}
