//! Container and reference mirrors.
//!
//! Native-backed variants keep only the converter and the native handle;
//! nested mirrors are converted again on every access.

use super::JeType;
use super::primitives;
use crate::convert::JeConverter;
use crate::element::{ExecutableElement, TypeElement, TypeParameterElement};
use crate::psi::{PsiClassId, PsiMethod, PsiMethodId, PsiPrimitiveType, PsiType, PsiTypeId};
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
enum ArrayRepr<'a> {
    Native {
        cx: &'a JeConverter<'a>,
        psi: PsiTypeId,
    },
    Synthesized {
        component: Box<JeType<'a>>,
    },
}

#[derive(Debug, Clone)]
pub struct ArrayType<'a> {
    repr: ArrayRepr<'a>,
}

impl<'a> ArrayType<'a> {
    pub(crate) fn native(cx: &'a JeConverter<'a>, psi: PsiTypeId) -> Self {
        Self {
            repr: ArrayRepr::Native { cx, psi },
        }
    }

    /// An array with no native backing, e.g. built for a varargs parameter.
    pub fn with_component(component: JeType<'a>) -> Self {
        Self {
            repr: ArrayRepr::Synthesized {
                component: Box::new(component),
            },
        }
    }

    pub fn native_type(&self) -> Option<PsiTypeId> {
        match &self.repr {
            ArrayRepr::Native { psi, .. } => Some(*psi),
            ArrayRepr::Synthesized { .. } => None,
        }
    }

    pub fn component_type(&self) -> JeType<'a> {
        match &self.repr {
            ArrayRepr::Native { cx, psi } => match cx.model().type_shape(*psi) {
                Some(PsiType::Array { component }) => cx.convert(*component),
                _ => JeType::Error,
            },
            ArrayRepr::Synthesized { component } => (**component).clone(),
        }
    }

    pub(crate) fn converter(&self) -> Option<&'a JeConverter<'a>> {
        match &self.repr {
            ArrayRepr::Native { cx, .. } => Some(*cx),
            ArrayRepr::Synthesized { component } => component.converter(),
        }
    }
}

impl PartialEq for ArrayType<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (ArrayRepr::Native { psi: a, .. }, ArrayRepr::Native { psi: b, .. }) => a == b,
            (
                ArrayRepr::Synthesized { component: a },
                ArrayRepr::Synthesized { component: b },
            ) => a == b,
            _ => false,
        }
    }
}

impl Eq for ArrayType<'_> {}

impl Hash for ArrayType<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.repr {
            ArrayRepr::Native { psi, .. } => {
                0u8.hash(state);
                psi.hash(state);
            }
            ArrayRepr::Synthesized { component } => {
                1u8.hash(state);
                component.hash(state);
            }
        }
    }
}

#[derive(Debug, Clone)]
enum WildcardRepr<'a> {
    Native {
        cx: &'a JeConverter<'a>,
        psi: PsiTypeId,
    },
    Synthesized {
        extends_bound: Box<JeType<'a>>,
        super_bound: Box<JeType<'a>>,
    },
}

#[derive(Debug, Clone)]
pub struct WildcardType<'a> {
    repr: WildcardRepr<'a>,
}

impl<'a> WildcardType<'a> {
    pub(crate) fn native(cx: &'a JeConverter<'a>, psi: PsiTypeId) -> Self {
        Self {
            repr: WildcardRepr::Native { cx, psi },
        }
    }

    pub fn with_bounds(extends_bound: JeType<'a>, super_bound: JeType<'a>) -> Self {
        Self {
            repr: WildcardRepr::Synthesized {
                extends_bound: Box::new(extends_bound),
                super_bound: Box::new(super_bound),
            },
        }
    }

    pub fn native_type(&self) -> Option<PsiTypeId> {
        match &self.repr {
            WildcardRepr::Native { psi, .. } => Some(*psi),
            WildcardRepr::Synthesized { .. } => None,
        }
    }

    /// Explicit bound of a native wildcard, with its direction.
    pub(crate) fn native_bound(&self) -> Option<(JeType<'a>, bool)> {
        let WildcardRepr::Native { cx, psi } = &self.repr else {
            return None;
        };
        match cx.model().type_shape(*psi) {
            Some(PsiType::Wildcard {
                bound: Some(bound),
                extends,
            }) => Some((cx.convert(*bound), *extends)),
            _ => None,
        }
    }

    /// `extends` bound, or `java.lang.Object` when absent.
    pub fn extends_bound(&self) -> JeType<'a> {
        match &self.repr {
            WildcardRepr::Native { cx, psi } => match cx.model().type_shape(*psi) {
                Some(PsiType::Wildcard {
                    bound: Some(bound),
                    extends: true,
                }) => cx.convert(*bound),
                Some(PsiType::Wildcard { .. }) => cx.java_lang_object(),
                _ => JeType::Error,
            },
            WildcardRepr::Synthesized { extends_bound, .. } => (**extends_bound).clone(),
        }
    }

    /// `super` bound, or the null type when absent.
    pub fn super_bound(&self) -> JeType<'a> {
        match &self.repr {
            WildcardRepr::Native { cx, psi } => match cx.model().type_shape(*psi) {
                Some(PsiType::Wildcard {
                    bound: Some(bound),
                    extends: false,
                }) => cx.convert(*bound),
                Some(PsiType::Wildcard { .. }) => JeType::Null,
                _ => JeType::Error,
            },
            WildcardRepr::Synthesized { super_bound, .. } => (**super_bound).clone(),
        }
    }

    pub(crate) fn converter(&self) -> Option<&'a JeConverter<'a>> {
        match &self.repr {
            WildcardRepr::Native { cx, .. } => Some(*cx),
            WildcardRepr::Synthesized { extends_bound, .. } => extends_bound.converter(),
        }
    }
}

impl PartialEq for WildcardType<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (WildcardRepr::Native { psi: a, .. }, WildcardRepr::Native { psi: b, .. }) => a == b,
            (
                WildcardRepr::Synthesized {
                    extends_bound: e1,
                    super_bound: s1,
                },
                WildcardRepr::Synthesized {
                    extends_bound: e2,
                    super_bound: s2,
                },
            ) => e1 == e2 && s1 == s2,
            _ => false,
        }
    }
}

impl Eq for WildcardType<'_> {}

impl Hash for WildcardType<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.repr {
            WildcardRepr::Native { psi, .. } => {
                0u8.hash(state);
                psi.hash(state);
            }
            WildcardRepr::Synthesized {
                extends_bound,
                super_bound,
            } => {
                1u8.hash(state);
                extends_bound.hash(state);
                super_bound.hash(state);
            }
        }
    }
}

#[derive(Debug, Clone)]
enum IntersectionRepr<'a> {
    Native {
        cx: &'a JeConverter<'a>,
        psi: PsiTypeId,
    },
    Synthesized {
        bounds: Vec<JeType<'a>>,
    },
}

#[derive(Debug, Clone)]
pub struct IntersectionType<'a> {
    repr: IntersectionRepr<'a>,
}

impl<'a> IntersectionType<'a> {
    pub(crate) fn native(cx: &'a JeConverter<'a>, psi: PsiTypeId) -> Self {
        Self {
            repr: IntersectionRepr::Native { cx, psi },
        }
    }

    pub fn with_bounds(bounds: Vec<JeType<'a>>) -> Self {
        Self {
            repr: IntersectionRepr::Synthesized { bounds },
        }
    }

    pub fn native_type(&self) -> Option<PsiTypeId> {
        match &self.repr {
            IntersectionRepr::Native { psi, .. } => Some(*psi),
            IntersectionRepr::Synthesized { .. } => None,
        }
    }

    /// Conjuncts in declaration order.
    pub fn bounds(&self) -> Vec<JeType<'a>> {
        match &self.repr {
            IntersectionRepr::Native { cx, psi } => match cx.model().type_shape(*psi) {
                Some(PsiType::Intersection { conjuncts }) => {
                    conjuncts.iter().map(|c| cx.convert(*c)).collect()
                }
                _ => Vec::new(),
            },
            IntersectionRepr::Synthesized { bounds } => bounds.clone(),
        }
    }

    pub(crate) fn converter(&self) -> Option<&'a JeConverter<'a>> {
        match &self.repr {
            IntersectionRepr::Native { cx, .. } => Some(*cx),
            IntersectionRepr::Synthesized { bounds } => bounds.iter().find_map(|b| b.converter()),
        }
    }
}

impl PartialEq for IntersectionType<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (IntersectionRepr::Native { psi: a, .. }, IntersectionRepr::Native { psi: b, .. }) => {
                a == b
            }
            (
                IntersectionRepr::Synthesized { bounds: a },
                IntersectionRepr::Synthesized { bounds: b },
            ) => a == b,
            _ => false,
        }
    }
}

impl Eq for IntersectionType<'_> {}

impl Hash for IntersectionType<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.repr {
            IntersectionRepr::Native { psi, .. } => {
                0u8.hash(state);
                psi.hash(state);
            }
            IntersectionRepr::Synthesized { bounds } => {
                1u8.hash(state);
                bounds.hash(state);
            }
        }
    }
}

/// Capability shared by declared types and the declared-error sentinel.
pub trait DeclaredTypeMirror<'a> {
    /// Type arguments in declaration order.
    fn type_arguments(&self) -> Vec<JeType<'a>>;

    fn as_element(&self) -> Option<TypeElement<'a>>;

    /// Type of the containing class, or `NONE` for top-level types.
    fn enclosing_type(&self) -> JeType<'a>;
}

#[derive(Debug, Clone)]
enum DeclaredRepr<'a> {
    Native {
        cx: &'a JeConverter<'a>,
        psi: PsiTypeId,
    },
    Compound {
        cx: &'a JeConverter<'a>,
        element: PsiClassId,
        arguments: Vec<JeType<'a>>,
    },
}

#[derive(Debug, Clone)]
pub struct DeclaredType<'a> {
    repr: DeclaredRepr<'a>,
}

impl<'a> DeclaredType<'a> {
    pub(crate) fn native(cx: &'a JeConverter<'a>, psi: PsiTypeId) -> Self {
        Self {
            repr: DeclaredRepr::Native { cx, psi },
        }
    }

    /// A generic instantiation with no native class type behind it.
    pub(crate) fn compound(
        cx: &'a JeConverter<'a>,
        element: PsiClassId,
        arguments: Vec<JeType<'a>>,
    ) -> Self {
        Self {
            repr: DeclaredRepr::Compound {
                cx,
                element,
                arguments,
            },
        }
    }

    pub fn native_type(&self) -> Option<PsiTypeId> {
        match &self.repr {
            DeclaredRepr::Native { psi, .. } => Some(*psi),
            DeclaredRepr::Compound { .. } => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self.repr, DeclaredRepr::Compound { .. })
    }

    fn cx(&self) -> &'a JeConverter<'a> {
        match &self.repr {
            DeclaredRepr::Native { cx, .. } | DeclaredRepr::Compound { cx, .. } => *cx,
        }
    }

    fn element_id(&self) -> Option<PsiClassId> {
        match &self.repr {
            DeclaredRepr::Native { cx, psi } => cx.model().resolve(*psi),
            DeclaredRepr::Compound { element, .. } => Some(*element),
        }
    }

    /// Name as written in the native reference, used when the class is gone.
    pub(crate) fn reference_name(&self) -> Option<&'a str> {
        match &self.repr {
            DeclaredRepr::Native { cx, psi } => match cx.model().type_shape(*psi) {
                Some(PsiType::Class { name, .. }) => Some(name.as_str()),
                _ => None,
            },
            DeclaredRepr::Compound { cx, element, .. } => {
                cx.model().class(*element).map(|c| c.qualified_name.as_str())
            }
        }
    }

    pub(crate) fn converter(&self) -> Option<&'a JeConverter<'a>> {
        Some(self.cx())
    }
}

impl<'a> DeclaredTypeMirror<'a> for DeclaredType<'a> {
    fn type_arguments(&self) -> Vec<JeType<'a>> {
        match &self.repr {
            DeclaredRepr::Native { cx, psi } => match cx.model().type_shape(*psi) {
                Some(PsiType::Class { parameters, .. }) => {
                    parameters.iter().map(|p| cx.convert(*p)).collect()
                }
                _ => Vec::new(),
            },
            DeclaredRepr::Compound { arguments, .. } => arguments.clone(),
        }
    }

    fn as_element(&self) -> Option<TypeElement<'a>> {
        TypeElement::new(self.cx(), self.element_id()?)
    }

    fn enclosing_type(&self) -> JeType<'a> {
        let cx = self.cx();
        self.element_id()
            .and_then(|id| cx.model().class(id))
            .and_then(|class| class.containing_class)
            .and_then(|outer| cx.model().class_type(outer))
            .map(|ty| cx.convert(ty))
            .unwrap_or(JeType::None)
    }
}

impl PartialEq for DeclaredType<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (DeclaredRepr::Native { psi: a, .. }, DeclaredRepr::Native { psi: b, .. }) => a == b,
            (
                DeclaredRepr::Compound {
                    element: e1,
                    arguments: a1,
                    ..
                },
                DeclaredRepr::Compound {
                    element: e2,
                    arguments: a2,
                    ..
                },
            ) => e1 == e2 && a1 == a2,
            _ => false,
        }
    }
}

impl Eq for DeclaredType<'_> {}

impl Hash for DeclaredType<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.repr {
            DeclaredRepr::Native { psi, .. } => {
                0u8.hash(state);
                psi.hash(state);
            }
            DeclaredRepr::Compound {
                element, arguments, ..
            } => {
                1u8.hash(state);
                element.hash(state);
                arguments.hash(state);
            }
        }
    }
}

/// Sentinel for unresolved class references. It is both a declared type with
/// nothing behind it and a no-type of kind `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeclaredErrorType;

impl<'a> DeclaredTypeMirror<'a> for DeclaredErrorType {
    fn type_arguments(&self) -> Vec<JeType<'a>> {
        Vec::new()
    }

    fn as_element(&self) -> Option<TypeElement<'a>> {
        None
    }

    fn enclosing_type(&self) -> JeType<'a> {
        JeType::None
    }
}

#[derive(Debug, Clone)]
pub struct TypeVariable<'a> {
    cx: &'a JeConverter<'a>,
    psi: PsiTypeId,
}

impl<'a> TypeVariable<'a> {
    pub(crate) fn native(cx: &'a JeConverter<'a>, psi: PsiTypeId) -> Self {
        Self { cx, psi }
    }

    pub fn native_type(&self) -> PsiTypeId {
        self.psi
    }

    fn parameter(&self) -> Option<(&'a str, Option<PsiClassId>, usize)> {
        match self.cx.model().type_shape(self.psi)? {
            PsiType::TypeParameter { name, owner, index } => Some((name.as_str(), *owner, *index)),
            _ => None,
        }
    }

    pub fn name(&self) -> &'a str {
        self.parameter().map(|(name, _, _)| name).unwrap_or_default()
    }

    /// Declared bound. Several bounds form an intersection; none means
    /// `java.lang.Object`.
    pub fn upper_bound(&self) -> JeType<'a> {
        let bounds: Vec<JeType<'a>> = self
            .as_element()
            .map(|element| element.bounds())
            .unwrap_or_default();
        match bounds.len() {
            0 => self.cx.java_lang_object(),
            1 => bounds.into_iter().next().unwrap_or(JeType::Error),
            _ => JeType::Intersection(IntersectionType::with_bounds(bounds)),
        }
    }

    pub fn lower_bound(&self) -> JeType<'a> {
        JeType::Null
    }

    /// The declaring type parameter; `None` for free variables.
    pub fn as_element(&self) -> Option<TypeParameterElement<'a>> {
        let (_, owner, index) = self.parameter()?;
        TypeParameterElement::new(self.cx, owner?, index)
    }

    pub(crate) fn converter(&self) -> Option<&'a JeConverter<'a>> {
        Some(self.cx)
    }
}

impl PartialEq for TypeVariable<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.psi == other.psi
    }
}

impl Eq for TypeVariable<'_> {}

impl Hash for TypeVariable<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.psi.hash(state);
    }
}

/// Type of a method or constructor; equal iff the backing member is.
#[derive(Debug, Clone)]
pub struct ExecutableType<'a> {
    cx: &'a JeConverter<'a>,
    member: PsiMethodId,
}

impl<'a> ExecutableType<'a> {
    pub(crate) fn native(cx: &'a JeConverter<'a>, member: PsiMethodId) -> Self {
        Self { cx, member }
    }

    pub fn member(&self) -> PsiMethodId {
        self.member
    }

    fn psi(&self) -> Option<&'a PsiMethod> {
        self.cx.model().method(self.member)
    }

    /// Return type; `void` for constructors.
    pub fn return_type(&self) -> JeType<'a> {
        match self.psi() {
            Some(method) => match method.return_type {
                Some(ty) => self.cx.convert(ty),
                None => primitives::lookup_by_psi(PsiPrimitiveType::Void)
                    .map(JeType::Primitive)
                    .unwrap_or(JeType::Error),
            },
            None => JeType::Error,
        }
    }

    pub fn parameter_types(&self) -> Vec<JeType<'a>> {
        self.psi()
            .map(|m| m.parameters.iter().map(|p| self.cx.convert(p.ty)).collect())
            .unwrap_or_default()
    }

    pub fn thrown_types(&self) -> Vec<JeType<'a>> {
        self.psi()
            .map(|m| m.throws.iter().map(|t| self.cx.convert(*t)).collect())
            .unwrap_or_default()
    }

    pub fn as_element(&self) -> Option<ExecutableElement<'a>> {
        ExecutableElement::new(self.cx, self.member)
    }

    pub(crate) fn converter(&self) -> Option<&'a JeConverter<'a>> {
        Some(self.cx)
    }
}

impl PartialEq for ExecutableType<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.member == other.member
    }
}

impl Eq for ExecutableType<'_> {}

impl Hash for ExecutableType<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.member.hash(state);
    }
}
