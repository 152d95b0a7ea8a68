//! Java type mirrors over a resolved program model.
//!
//! [`JeConverter`] classifies native types into [`TypeKind`]s and wraps
//! them as [`JeType`] mirrors; [`JeElements`] answers element-level
//! questions over the same model.

pub mod config;
pub mod convert;
pub mod element;
pub mod elements;
pub mod error;
pub mod mirror;
pub mod naming;
pub mod psi;

pub use config::{MirrorConfig, TypeVariableMode};
pub use convert::{JAVA_LANG_OBJECT, JeConverter};
pub use element::{Element, ExecutableElement, PackageElement, TypeElement, TypeParameterElement};
pub use elements::JeElements;
pub use error::{ModelError, Result};
pub use mirror::{
    ArrayType, DeclaredErrorType, DeclaredType, DeclaredTypeMirror, Dispatch, ExecutableType,
    IntersectionType, JeType, PrimitiveType, TypeVariable, TypeVisitor, WildcardType,
};
pub use psi::{ProgramModel, PsiArena};

pub use mirrorscope_api::{
    AnnotatedConstruct, AnnotationMirror, ElementKind, PrimitiveKind, TypeKind, TypeMirror,
};
