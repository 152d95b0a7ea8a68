//! Canonical type mirrors over the native program model.
//!
//! [`JeType`] is a closed sum over every representation. Primitive and
//! sentinel variants are singletons; container variants are created per
//! conversion and read their components lazily.

pub mod primitives;
mod render;
pub mod types;
pub mod visitor;

pub use primitives::PrimitiveType;
pub use types::{
    ArrayType, DeclaredErrorType, DeclaredType, DeclaredTypeMirror, ExecutableType,
    IntersectionType, TypeVariable, WildcardType,
};
pub use visitor::{Dispatch, TypeVisitor};

use crate::convert::JeConverter;
use mirrorscope_api::{TypeKind, TypeMirror};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub enum JeType<'a> {
    Primitive(&'static PrimitiveType),
    Null,
    /// Absence of a type, e.g. the enclosing type of a top-level class.
    None,
    /// Pseudo-type of a package.
    Package,
    /// Unclassifiable native type.
    Error,
    /// Unresolved class reference.
    DeclaredError(DeclaredErrorType),
    Array(ArrayType<'a>),
    Wildcard(WildcardType<'a>),
    Intersection(IntersectionType<'a>),
    Declared(DeclaredType<'a>),
    TypeVar(TypeVariable<'a>),
    Executable(ExecutableType<'a>),
}

impl<'a> JeType<'a> {
    pub fn dispatch(&self) -> Dispatch {
        match self {
            JeType::None | JeType::Package => Dispatch::NoType,
            _ => Dispatch::Generic,
        }
    }

    pub fn accept<R, P, V>(&self, visitor: &mut V, p: P) -> R
    where
        V: TypeVisitor<'a, R, P> + ?Sized,
    {
        match self.dispatch() {
            Dispatch::NoType => visitor.visit_no_type(self, p),
            Dispatch::Generic => visitor.visit(self, p),
        }
    }

    /// True for the sentinels that carry no structure.
    pub fn is_no_type(&self) -> bool {
        matches!(
            self,
            JeType::None | JeType::Package | JeType::Error | JeType::DeclaredError(_)
        )
    }

    pub fn array_of(component: JeType<'a>) -> Self {
        JeType::Array(ArrayType::with_component(component))
    }

    pub fn wildcard_with_bounds(extends_bound: JeType<'a>, super_bound: JeType<'a>) -> Self {
        JeType::Wildcard(WildcardType::with_bounds(extends_bound, super_bound))
    }

    pub fn intersection_of(bounds: Vec<JeType<'a>>) -> Self {
        JeType::Intersection(IntersectionType::with_bounds(bounds))
    }

    pub fn as_primitive(&self) -> Option<&'static PrimitiveType> {
        match self {
            JeType::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayType<'a>> {
        match self {
            JeType::Array(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_wildcard(&self) -> Option<&WildcardType<'a>> {
        match self {
            JeType::Wildcard(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_intersection(&self) -> Option<&IntersectionType<'a>> {
        match self {
            JeType::Intersection(t) => Some(t),
            _ => None,
        }
    }

    /// Declared view; covers both real declared types and the error sentinel.
    pub fn as_declared(&self) -> Option<&dyn DeclaredTypeMirror<'a>> {
        match self {
            JeType::Declared(t) => Some(t),
            JeType::DeclaredError(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_type_var(&self) -> Option<&TypeVariable<'a>> {
        match self {
            JeType::TypeVar(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_executable(&self) -> Option<&ExecutableType<'a>> {
        match self {
            JeType::Executable(t) => Some(t),
            _ => None,
        }
    }

    pub(crate) fn converter(&self) -> Option<&'a JeConverter<'a>> {
        match self {
            JeType::Array(t) => t.converter(),
            JeType::Wildcard(t) => t.converter(),
            JeType::Intersection(t) => t.converter(),
            JeType::Declared(t) => t.converter(),
            JeType::TypeVar(t) => t.converter(),
            JeType::Executable(t) => t.converter(),
            _ => None,
        }
    }
}

impl TypeMirror for JeType<'_> {
    fn kind(&self) -> TypeKind {
        match self {
            JeType::Primitive(p) => p.kind(),
            JeType::Null => TypeKind::Null,
            JeType::None => TypeKind::None,
            JeType::Package => TypeKind::Package,
            JeType::Error | JeType::DeclaredError(_) => TypeKind::Error,
            JeType::Array(_) => TypeKind::Array,
            JeType::Wildcard(_) => TypeKind::Wildcard,
            JeType::Intersection(_) => TypeKind::Intersection,
            JeType::Declared(_) => TypeKind::Declared,
            JeType::TypeVar(_) => TypeKind::TypeVar,
            JeType::Executable(_) => TypeKind::Executable,
        }
    }
}

impl PartialEq for JeType<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JeType::Primitive(a), JeType::Primitive(b)) => a.kind() == b.kind(),
            (JeType::Null, JeType::Null)
            | (JeType::None, JeType::None)
            | (JeType::Package, JeType::Package)
            | (JeType::Error, JeType::Error)
            | (JeType::DeclaredError(_), JeType::DeclaredError(_)) => true,
            (JeType::Array(a), JeType::Array(b)) => a == b,
            (JeType::Wildcard(a), JeType::Wildcard(b)) => a == b,
            (JeType::Intersection(a), JeType::Intersection(b)) => a == b,
            (JeType::Declared(a), JeType::Declared(b)) => a == b,
            (JeType::TypeVar(a), JeType::TypeVar(b)) => a == b,
            (JeType::Executable(a), JeType::Executable(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for JeType<'_> {}

impl Hash for JeType<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            JeType::Primitive(p) => p.kind().hash(state),
            JeType::Array(t) => t.hash(state),
            JeType::Wildcard(t) => t.hash(state),
            JeType::Intersection(t) => t.hash(state),
            JeType::Declared(t) => t.hash(state),
            JeType::TypeVar(t) => t.hash(state),
            JeType::Executable(t) => t.hash(state),
            JeType::Null
            | JeType::None
            | JeType::Package
            | JeType::Error
            | JeType::DeclaredError(_) => {}
        }
    }
}

impl fmt::Display for JeType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}
