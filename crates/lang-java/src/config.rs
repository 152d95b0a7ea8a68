use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How type-parameter references are represented.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TypeVariableMode {
    /// Convert to `TypeVariable` with kind `TYPEVAR`.
    #[default]
    FirstClass,
    /// Fold into the `ERROR` sentinel.
    Error,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct MirrorConfig {
    pub type_variables: TypeVariableMode,
    /// Nesting limit for recursive traversals such as rendering.
    pub max_depth: usize,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            type_variables: TypeVariableMode::FirstClass,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MirrorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_type_variables(mut self, mode: TypeVariableMode) -> Self {
        self.type_variables = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MirrorConfig::from_json(r#"{ "type_variables": "error" }"#).unwrap();
        assert_eq!(config.type_variables, TypeVariableMode::Error);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);

        let config = MirrorConfig::from_json("{}").unwrap();
        assert_eq!(config, MirrorConfig::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(MirrorConfig::from_json("{ max_depth: }").is_err());
    }
}
