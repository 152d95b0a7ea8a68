use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An annotation as seen on an element, e.g. `@Deprecated(since = "9")`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct AnnotationMirror {
    /// Fully qualified name of the annotation class.
    pub annotation_type: String,
    /// Explicit element values in declaration order.
    #[serde(default)]
    pub element_values: IndexMap<String, serde_json::Value>,
}

impl AnnotationMirror {
    pub fn new(annotation_type: impl Into<String>) -> Self {
        Self {
            annotation_type: annotation_type.into(),
            element_values: IndexMap::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.element_values.insert(name.into(), value);
        self
    }

    pub fn is(&self, fqn: &str) -> bool {
        self.annotation_type == fqn
    }
}
