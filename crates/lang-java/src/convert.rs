//! Kind classification and conversion of native types into mirrors.

use crate::config::{MirrorConfig, TypeVariableMode};
use crate::mirror::primitives;
use crate::mirror::{
    ArrayType, DeclaredErrorType, DeclaredType, ExecutableType, IntersectionType, JeType,
    TypeVariable, WildcardType,
};
use crate::psi::{PsiClassId, PsiMethodId, PsiType, PsiTypeId, ProgramModel};
use mirrorscope_api::{TypeKind, TypeMirror};
use std::fmt;

pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";

/// Entry point of the adapter: a read-only view of a [`ProgramModel`]
/// that classifies native types and wraps them as [`JeType`] mirrors.
///
/// Conversion is shallow. Mirrors borrow the converter and convert their
/// components again on each access, so cyclic bounds never recurse here.
#[derive(Clone, Copy)]
pub struct JeConverter<'m> {
    model: &'m dyn ProgramModel,
    config: MirrorConfig,
}

impl fmt::Debug for JeConverter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JeConverter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'m> JeConverter<'m> {
    pub fn new(model: &'m dyn ProgramModel) -> Self {
        Self::with_config(model, MirrorConfig::default())
    }

    pub fn with_config(model: &'m dyn ProgramModel, config: MirrorConfig) -> Self {
        Self { model, config }
    }

    pub fn model(&self) -> &'m dyn ProgramModel {
        self.model
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Kind of a native type. Total: anything unrecognized is `ERROR`.
    pub fn classify(&self, ty: PsiTypeId) -> TypeKind {
        let Some(shape) = self.model.type_shape(ty) else {
            return TypeKind::Error;
        };
        match shape {
            PsiType::Primitive(_) => primitives::lookup_by_native(shape)
                .map(|p| p.kind())
                .unwrap_or(TypeKind::Error),
            PsiType::Null => TypeKind::Null,
            PsiType::Array { .. } => TypeKind::Array,
            PsiType::Wildcard { .. } => TypeKind::Wildcard,
            PsiType::Class {
                resolved: Some(_), ..
            } => TypeKind::Declared,
            PsiType::Class { resolved: None, .. } => TypeKind::Error,
            PsiType::Intersection { .. } => TypeKind::Intersection,
            PsiType::TypeParameter { .. } => match self.config.type_variables {
                TypeVariableMode::FirstClass => TypeKind::TypeVar,
                TypeVariableMode::Error => TypeKind::Error,
            },
            PsiType::Disjunction { .. } => TypeKind::Error,
        }
    }

    /// Wrap a native type. Never fails; unclassifiable input becomes an
    /// error sentinel.
    pub fn convert(&self, ty: PsiTypeId) -> JeType<'_> {
        let Some(shape) = self.model.type_shape(ty) else {
            tracing::debug!("dangling native type handle {:?}", ty);
            return JeType::Error;
        };
        match shape {
            PsiType::Primitive(_) => primitives::lookup_by_native(shape)
                .map(JeType::Primitive)
                .unwrap_or(JeType::Error),
            PsiType::Null => JeType::Null,
            PsiType::Array { .. } => JeType::Array(ArrayType::native(self, ty)),
            PsiType::Wildcard { .. } => JeType::Wildcard(WildcardType::native(self, ty)),
            PsiType::Class {
                resolved: Some(_), ..
            } => JeType::Declared(DeclaredType::native(self, ty)),
            PsiType::Class {
                name,
                resolved: None,
                ..
            } => {
                tracing::debug!("unresolved class reference {}", name);
                JeType::DeclaredError(DeclaredErrorType)
            }
            PsiType::Intersection { .. } => {
                JeType::Intersection(IntersectionType::native(self, ty))
            }
            PsiType::TypeParameter { name, .. } => match self.config.type_variables {
                TypeVariableMode::FirstClass => JeType::TypeVar(TypeVariable::native(self, ty)),
                TypeVariableMode::Error => {
                    tracing::debug!("type variable {} folded into error type", name);
                    JeType::Error
                }
            },
            PsiType::Disjunction { .. } => {
                tracing::debug!("disjunction type {:?} has no mirror", ty);
                JeType::Error
            }
        }
    }

    /// Type of a method or constructor.
    pub fn convert_executable(&self, member: PsiMethodId) -> JeType<'_> {
        if self.model.method(member).is_none() {
            tracing::debug!("dangling method handle {:?}", member);
            return JeType::Error;
        }
        JeType::Executable(ExecutableType::native(self, member))
    }

    /// A declared type built from an element and explicit arguments, for
    /// instantiations that have no native class type.
    pub fn compound_declared<'a>(
        &'a self,
        element: PsiClassId,
        arguments: Vec<JeType<'a>>,
    ) -> JeType<'a> {
        if self.model.class(element).is_none() {
            return JeType::DeclaredError(DeclaredErrorType);
        }
        JeType::Declared(DeclaredType::compound(self, element, arguments))
    }

    pub fn java_lang_object(&self) -> JeType<'_> {
        self.model
            .find_class(JAVA_LANG_OBJECT)
            .and_then(|id| self.model.class_type(id))
            .map(|ty| self.convert(ty))
            .unwrap_or(JeType::Error)
    }

    pub fn package_type(&self) -> JeType<'_> {
        JeType::Package
    }

    pub fn none_type(&self) -> JeType<'_> {
        JeType::None
    }

    pub fn null_type(&self) -> JeType<'_> {
        JeType::Null
    }
}
