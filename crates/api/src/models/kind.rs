use crate::error::MirrorError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine primitive kinds, `void` included.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Short,
        PrimitiveKind::Boolean,
        PrimitiveKind::Void,
    ];

    /// Java keyword spelling, e.g. "int".
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Void => "void",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for PrimitiveKind {
    type Err = MirrorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .ok_or_else(|| MirrorError::UnknownPrimitive(s.to_string()))
    }
}

/// Closed taxonomy of type kinds exposed by the reflection view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TypeKind {
    Primitive(PrimitiveKind),
    Array,
    Wildcard,
    Declared,
    Intersection,
    Executable,
    TypeVar,
    Null,
    None,
    Package,
    Error,
}

impl TypeKind {
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeKind::Primitive(_))
    }

    /// Kinds that carry no structural information.
    pub fn is_no_type(&self) -> bool {
        matches!(self, TypeKind::None | TypeKind::Package | TypeKind::Error)
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            TypeKind::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<PrimitiveKind> for TypeKind {
    fn from(kind: PrimitiveKind) -> Self {
        TypeKind::Primitive(kind)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Primitive(kind) => write!(f, "{}", kind.keyword().to_uppercase()),
            TypeKind::Array => f.write_str("ARRAY"),
            TypeKind::Wildcard => f.write_str("WILDCARD"),
            TypeKind::Declared => f.write_str("DECLARED"),
            TypeKind::Intersection => f.write_str("INTERSECTION"),
            TypeKind::Executable => f.write_str("EXECUTABLE"),
            TypeKind::TypeVar => f.write_str("TYPEVAR"),
            TypeKind::Null => f.write_str("NULL"),
            TypeKind::None => f.write_str("NONE"),
            TypeKind::Package => f.write_str("PACKAGE"),
            TypeKind::Error => f.write_str("ERROR"),
        }
    }
}

impl FromStr for TypeKind {
    type Err = MirrorError;

    /// Accepts the upper-case names printed by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "ARRAY" => TypeKind::Array,
            "WILDCARD" => TypeKind::Wildcard,
            "DECLARED" => TypeKind::Declared,
            "INTERSECTION" => TypeKind::Intersection,
            "EXECUTABLE" => TypeKind::Executable,
            "TYPEVAR" => TypeKind::TypeVar,
            "NULL" => TypeKind::Null,
            "NONE" => TypeKind::None,
            "PACKAGE" => TypeKind::Package,
            "ERROR" => TypeKind::Error,
            other => {
                return other
                    .to_lowercase()
                    .parse::<PrimitiveKind>()
                    .map(TypeKind::Primitive)
                    .map_err(|_| MirrorError::UnknownTypeKind(s.to_string()));
            }
        };
        Ok(kind)
    }
}

/// Kinds of program elements seen through the element view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Package,
    Class,
    Interface,
    Enum,
    AnnotationType,
    Method,
    Constructor,
    TypeParameter,
}

impl ElementKind {
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            ElementKind::Class
                | ElementKind::Interface
                | ElementKind::Enum
                | ElementKind::AnnotationType
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Package => "PACKAGE",
            ElementKind::Class => "CLASS",
            ElementKind::Interface => "INTERFACE",
            ElementKind::Enum => "ENUM",
            ElementKind::AnnotationType => "ANNOTATION_TYPE",
            ElementKind::Method => "METHOD",
            ElementKind::Constructor => "CONSTRUCTOR",
            ElementKind::TypeParameter => "TYPE_PARAMETER",
        };
        f.write_str(name)
    }
}
