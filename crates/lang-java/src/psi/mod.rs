//! Native program model consumed by the mirror adapter.
//!
//! Handles (`PsiTypeId`, `PsiClassId`, `PsiMethodId`) are opaque ids into a
//! [`ProgramModel`]. The adapter only reads through the trait; [`PsiArena`]
//! is the in-memory implementation used by tools and tests.

pub mod arena;
pub mod decl;

pub use arena::PsiArena;
pub use decl::{AnnotationDecl, ClassDecl, MethodDecl, PackageDecl, ParamDecl, ProgramDecl, TypeParamDecl, TypeSpec};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PsiTypeId(pub u32);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PsiClassId(pub u32);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PsiMethodId(pub u32);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PsiPrimitiveType {
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

impl PsiPrimitiveType {
    pub const ALL: [PsiPrimitiveType; 9] = [
        PsiPrimitiveType::Byte,
        PsiPrimitiveType::Char,
        PsiPrimitiveType::Double,
        PsiPrimitiveType::Float,
        PsiPrimitiveType::Int,
        PsiPrimitiveType::Long,
        PsiPrimitiveType::Short,
        PsiPrimitiveType::Boolean,
        PsiPrimitiveType::Void,
    ];

    pub fn canonical_text(&self) -> &'static str {
        match self {
            PsiPrimitiveType::Byte => "byte",
            PsiPrimitiveType::Char => "char",
            PsiPrimitiveType::Double => "double",
            PsiPrimitiveType::Float => "float",
            PsiPrimitiveType::Int => "int",
            PsiPrimitiveType::Long => "long",
            PsiPrimitiveType::Short => "short",
            PsiPrimitiveType::Boolean => "boolean",
            PsiPrimitiveType::Void => "void",
        }
    }

    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.canonical_text() == text)
    }
}

/// Structural shape of a native type.
///
/// Shapes refer to nested types by id, so a shape never owns its
/// components and recursive generics stay finite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PsiType {
    Primitive(PsiPrimitiveType),
    Null,
    Array {
        component: PsiTypeId,
    },
    /// `?`, `? extends B` (`extends == true`) or `? super B`.
    Wildcard {
        bound: Option<PsiTypeId>,
        extends: bool,
    },
    /// Class, interface or generic instantiation. `resolved` is `None` when
    /// the reference names no known class.
    Class {
        name: String,
        resolved: Option<PsiClassId>,
        parameters: Vec<PsiTypeId>,
    },
    Intersection {
        conjuncts: Vec<PsiTypeId>,
    },
    /// Reference to the `index`-th type parameter of `owner`. A free
    /// variable has no owner.
    TypeParameter {
        name: String,
        owner: Option<PsiClassId>,
        index: usize,
    },
    /// Multi-catch union `A | B`.
    Disjunction {
        variants: Vec<PsiTypeId>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PsiClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PsiAnnotation {
    pub qualified_name: String,
    #[serde(default)]
    pub attributes: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PsiTypeParameter {
    pub name: String,
    /// Declared bounds in source order; empty means `java.lang.Object`.
    pub bounds: Vec<PsiTypeId>,
    /// The `TypeParameter` shape referring to this parameter.
    pub ty: PsiTypeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PsiClass {
    pub qualified_name: String,
    pub name: String,
    pub package: String,
    pub kind: PsiClassKind,
    pub containing_class: Option<PsiClassId>,
    pub type_parameters: Vec<PsiTypeParameter>,
    pub super_class: Option<PsiTypeId>,
    pub interfaces: Vec<PsiTypeId>,
    pub methods: Vec<PsiMethodId>,
    pub inner_classes: Vec<PsiClassId>,
    pub annotations: Vec<PsiAnnotation>,
    pub modifiers: Vec<String>,
}

impl PsiClass {
    /// Direct supertypes: superclass first, then interfaces.
    pub fn super_types(&self) -> impl Iterator<Item = PsiTypeId> + '_ {
        self.super_class.into_iter().chain(self.interfaces.iter().copied())
    }

    pub fn find_annotation(&self, fqn: &str) -> Option<&PsiAnnotation> {
        self.annotations.iter().find(|a| a.qualified_name == fqn)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PsiParameter {
    pub name: String,
    pub ty: PsiTypeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PsiMethod {
    pub name: String,
    pub containing_class: PsiClassId,
    pub is_constructor: bool,
    /// `None` for constructors.
    pub return_type: Option<PsiTypeId>,
    pub parameters: Vec<PsiParameter>,
    pub throws: Vec<PsiTypeId>,
    pub annotations: Vec<PsiAnnotation>,
    pub modifiers: Vec<String>,
    pub default_value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PsiPackage {
    pub qualified_name: String,
    pub annotations: Vec<PsiAnnotation>,
}

/// Read-only access to a resolved program model.
///
/// Every lookup returns `None` for handles the model does not know about;
/// callers treat that as an unresolvable type rather than a failure.
pub trait ProgramModel: Send + Sync {
    fn type_shape(&self, ty: PsiTypeId) -> Option<&PsiType>;

    fn class(&self, id: PsiClassId) -> Option<&PsiClass>;

    fn method(&self, id: PsiMethodId) -> Option<&PsiMethod>;

    fn find_class(&self, fqn: &str) -> Option<PsiClassId>;

    fn find_package(&self, name: &str) -> Option<&PsiPackage>;

    /// The class's own type, parameterized by its type parameters.
    fn class_type(&self, id: PsiClassId) -> Option<PsiTypeId>;

    /// Class a type refers to, if it is a resolved class type.
    fn resolve(&self, ty: PsiTypeId) -> Option<PsiClassId> {
        match self.type_shape(ty)? {
            PsiType::Class { resolved, .. } => *resolved,
            _ => None,
        }
    }
}
