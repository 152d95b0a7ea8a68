//! Element views over program model declarations.

use crate::convert::JeConverter;
use crate::mirror::JeType;
use crate::psi::{
    PsiAnnotation, PsiClass, PsiClassId, PsiClassKind, PsiMethod, PsiMethodId, PsiPackage,
    PsiTypeParameter,
};
use mirrorscope_api::{AnnotatedConstruct, AnnotationMirror, ElementKind};

fn to_mirrors(annotations: &[PsiAnnotation]) -> Vec<AnnotationMirror> {
    annotations
        .iter()
        .map(|a| AnnotationMirror {
            annotation_type: a.qualified_name.clone(),
            element_values: a.attributes.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct TypeElement<'a> {
    cx: &'a JeConverter<'a>,
    id: PsiClassId,
    class: &'a PsiClass,
}

impl<'a> TypeElement<'a> {
    pub fn new(cx: &'a JeConverter<'a>, id: PsiClassId) -> Option<Self> {
        let class = cx.model().class(id)?;
        Some(Self { cx, id, class })
    }

    pub fn id(&self) -> PsiClassId {
        self.id
    }

    pub fn psi(&self) -> &'a PsiClass {
        self.class
    }

    pub fn qualified_name(&self) -> &'a str {
        &self.class.qualified_name
    }

    pub fn simple_name(&self) -> &'a str {
        &self.class.name
    }

    pub fn kind(&self) -> ElementKind {
        match self.class.kind {
            PsiClassKind::Class => ElementKind::Class,
            PsiClassKind::Interface => ElementKind::Interface,
            PsiClassKind::Enum => ElementKind::Enum,
            PsiClassKind::Annotation => ElementKind::AnnotationType,
        }
    }

    /// Containing class for nested types, otherwise the package.
    pub fn enclosing_element(&self) -> Option<Element<'a>> {
        match self.class.containing_class {
            Some(outer) => TypeElement::new(self.cx, outer).map(Element::Type),
            None => PackageElement::new(self.cx, &self.class.package).map(Element::Package),
        }
    }

    /// The class's own type, generic over its type parameters.
    pub fn as_type(&self) -> JeType<'a> {
        self.cx
            .model()
            .class_type(self.id)
            .map(|ty| self.cx.convert(ty))
            .unwrap_or(JeType::Error)
    }

    /// Superclass type, or `NONE` for interfaces and `java.lang.Object`.
    pub fn superclass(&self) -> JeType<'a> {
        self.class
            .super_class
            .map(|ty| self.cx.convert(ty))
            .unwrap_or(JeType::None)
    }

    pub fn interfaces(&self) -> Vec<JeType<'a>> {
        self.class
            .interfaces
            .iter()
            .map(|ty| self.cx.convert(*ty))
            .collect()
    }

    pub fn type_parameters(&self) -> Vec<TypeParameterElement<'a>> {
        (0..self.class.type_parameters.len())
            .filter_map(|index| TypeParameterElement::new(self.cx, self.id, index))
            .collect()
    }

    pub fn methods(&self) -> Vec<ExecutableElement<'a>> {
        self.class
            .methods
            .iter()
            .filter_map(|m| ExecutableElement::new(self.cx, *m))
            .collect()
    }

    /// Methods, constructors and member types in declaration order.
    pub fn enclosed_elements(&self) -> Vec<Element<'a>> {
        let members = self.methods().into_iter().map(Element::Executable);
        let nested = self
            .class
            .inner_classes
            .iter()
            .filter_map(|c| TypeElement::new(self.cx, *c))
            .map(Element::Type);
        members.chain(nested).collect()
    }
}

impl AnnotatedConstruct for TypeElement<'_> {
    fn annotation_mirrors(&self) -> Vec<AnnotationMirror> {
        to_mirrors(&self.class.annotations)
    }
}

impl PartialEq for TypeElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeElement<'_> {}

#[derive(Debug, Clone, Copy)]
pub struct PackageElement<'a> {
    package: &'a PsiPackage,
}

impl<'a> PackageElement<'a> {
    pub fn new(cx: &'a JeConverter<'a>, name: &str) -> Option<Self> {
        let package = cx.model().find_package(name)?;
        Some(Self { package })
    }

    pub fn qualified_name(&self) -> &'a str {
        &self.package.qualified_name
    }

    pub fn simple_name(&self) -> &'a str {
        let name = self.qualified_name();
        name.rsplit('.').next().unwrap_or(name)
    }

    pub fn as_type(&self) -> JeType<'a> {
        JeType::Package
    }
}

impl AnnotatedConstruct for PackageElement<'_> {
    fn annotation_mirrors(&self) -> Vec<AnnotationMirror> {
        to_mirrors(&self.package.annotations)
    }
}

impl PartialEq for PackageElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.package.qualified_name == other.package.qualified_name
    }
}

impl Eq for PackageElement<'_> {}

#[derive(Debug, Clone, Copy)]
pub struct ExecutableElement<'a> {
    cx: &'a JeConverter<'a>,
    id: PsiMethodId,
    method: &'a PsiMethod,
}

impl<'a> ExecutableElement<'a> {
    pub fn new(cx: &'a JeConverter<'a>, id: PsiMethodId) -> Option<Self> {
        let method = cx.model().method(id)?;
        Some(Self { cx, id, method })
    }

    pub fn id(&self) -> PsiMethodId {
        self.id
    }

    pub fn psi(&self) -> &'a PsiMethod {
        self.method
    }

    pub fn simple_name(&self) -> &'a str {
        &self.method.name
    }

    pub fn kind(&self) -> ElementKind {
        if self.method.is_constructor {
            ElementKind::Constructor
        } else {
            ElementKind::Method
        }
    }

    pub fn enclosing_element(&self) -> Option<Element<'a>> {
        TypeElement::new(self.cx, self.method.containing_class).map(Element::Type)
    }

    pub fn as_type(&self) -> JeType<'a> {
        self.cx.convert_executable(self.id)
    }

    pub fn return_type(&self) -> JeType<'a> {
        match self.as_type() {
            JeType::Executable(executable) => executable.return_type(),
            other => other,
        }
    }

    /// Parameter names paired with their types.
    pub fn parameters(&self) -> Vec<(&'a str, JeType<'a>)> {
        self.method
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), self.cx.convert(p.ty)))
            .collect()
    }
}

impl AnnotatedConstruct for ExecutableElement<'_> {
    fn annotation_mirrors(&self) -> Vec<AnnotationMirror> {
        to_mirrors(&self.method.annotations)
    }
}

impl PartialEq for ExecutableElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExecutableElement<'_> {}

#[derive(Debug, Clone, Copy)]
pub struct TypeParameterElement<'a> {
    cx: &'a JeConverter<'a>,
    owner: PsiClassId,
    index: usize,
    param: &'a PsiTypeParameter,
}

impl<'a> TypeParameterElement<'a> {
    pub fn new(cx: &'a JeConverter<'a>, owner: PsiClassId, index: usize) -> Option<Self> {
        let param = cx.model().class(owner)?.type_parameters.get(index)?;
        Some(Self {
            cx,
            owner,
            index,
            param,
        })
    }

    pub fn simple_name(&self) -> &'a str {
        &self.param.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> ElementKind {
        ElementKind::TypeParameter
    }

    pub fn generic_element(&self) -> Option<TypeElement<'a>> {
        TypeElement::new(self.cx, self.owner)
    }

    /// Declared bounds in source order.
    pub fn bounds(&self) -> Vec<JeType<'a>> {
        self.param
            .bounds
            .iter()
            .map(|b| self.cx.convert(*b))
            .collect()
    }

    pub fn as_type(&self) -> JeType<'a> {
        self.cx.convert(self.param.ty)
    }
}

impl PartialEq for TypeParameterElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl Eq for TypeParameterElement<'_> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Type(TypeElement<'a>),
    Package(PackageElement<'a>),
    Executable(ExecutableElement<'a>),
    TypeParameter(TypeParameterElement<'a>),
}

impl<'a> Element<'a> {
    pub fn simple_name(&self) -> &'a str {
        match self {
            Element::Type(e) => e.simple_name(),
            Element::Package(e) => e.simple_name(),
            Element::Executable(e) => e.simple_name(),
            Element::TypeParameter(e) => e.simple_name(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Type(e) => e.kind(),
            Element::Package(_) => ElementKind::Package,
            Element::Executable(e) => e.kind(),
            Element::TypeParameter(e) => e.kind(),
        }
    }

    pub fn enclosing_element(&self) -> Option<Element<'a>> {
        match self {
            Element::Type(e) => e.enclosing_element(),
            Element::Package(_) => None,
            Element::Executable(e) => e.enclosing_element(),
            Element::TypeParameter(e) => e.generic_element().map(Element::Type),
        }
    }

    pub fn as_type(&self) -> JeType<'a> {
        match self {
            Element::Type(e) => e.as_type(),
            Element::Package(e) => e.as_type(),
            Element::Executable(e) => e.as_type(),
            Element::TypeParameter(e) => e.as_type(),
        }
    }
}

impl AnnotatedConstruct for Element<'_> {
    fn annotation_mirrors(&self) -> Vec<AnnotationMirror> {
        match self {
            Element::Type(e) => e.annotation_mirrors(),
            Element::Package(e) => e.annotation_mirrors(),
            Element::Executable(e) => e.annotation_mirrors(),
            Element::TypeParameter(_) => Vec::new(),
        }
    }
}
