//! Serializable declarations used to build a [`PsiArena`](super::PsiArena).

use super::{PsiAnnotation, PsiClassKind, PsiPrimitiveType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Textual type reference, resolved against declared classes when interned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TypeSpec {
    Primitive(PsiPrimitiveType),
    Null,
    Class {
        name: String,
        #[serde(default)]
        args: Vec<TypeSpec>,
    },
    Array(Box<TypeSpec>),
    Wildcard {
        #[serde(default)]
        bound: Option<Box<TypeSpec>>,
        #[serde(default = "default_extends")]
        extends: bool,
    },
    Intersection(Vec<TypeSpec>),
    Disjunction(Vec<TypeSpec>),
    /// Type parameter name, looked up in the enclosing class scope.
    TypeVar(String),
}

fn default_extends() -> bool {
    true
}

impl TypeSpec {
    pub fn primitive(p: PsiPrimitiveType) -> Self {
        TypeSpec::Primitive(p)
    }

    pub fn class(name: impl Into<String>) -> Self {
        TypeSpec::Class {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeSpec>) -> Self {
        TypeSpec::Class {
            name: name.into(),
            args,
        }
    }

    pub fn array(component: TypeSpec) -> Self {
        TypeSpec::Array(Box::new(component))
    }

    pub fn var(name: impl Into<String>) -> Self {
        TypeSpec::TypeVar(name.into())
    }

    pub fn unbounded() -> Self {
        TypeSpec::Wildcard {
            bound: None,
            extends: true,
        }
    }

    pub fn extends(bound: TypeSpec) -> Self {
        TypeSpec::Wildcard {
            bound: Some(Box::new(bound)),
            extends: true,
        }
    }

    pub fn super_of(bound: TypeSpec) -> Self {
        TypeSpec::Wildcard {
            bound: Some(Box::new(bound)),
            extends: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnnotationDecl {
    pub name: String,
    #[serde(default)]
    pub values: IndexMap<String, serde_json::Value>,
}

impl AnnotationDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: IndexMap::new(),
        }
    }
}

impl From<AnnotationDecl> for PsiAnnotation {
    fn from(decl: AnnotationDecl) -> Self {
        PsiAnnotation {
            qualified_name: decl.name,
            attributes: decl.values,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TypeParamDecl {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<TypeSpec>,
}

impl TypeParamDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded(name: impl Into<String>, bounds: Vec<TypeSpec>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TypeSpec,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub constructor: bool,
    /// Defaults to `void` for methods; ignored for constructors.
    #[serde(default)]
    pub return_type: Option<TypeSpec>,
    #[serde(default)]
    pub parameters: Vec<ParamDecl>,
    #[serde(default)]
    pub throws: Vec<TypeSpec>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDecl>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Default value of an annotation type element.
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn constructor() -> Self {
        Self {
            name: "<init>".to_string(),
            constructor: true,
            ..Default::default()
        }
    }

    pub fn returns(mut self, ty: TypeSpec) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeSpec) -> Self {
        self.parameters.push(ParamDecl {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn throws(mut self, ty: TypeSpec) -> Self {
        self.throws.push(ty);
        self
    }

    pub fn annotated(mut self, annotation: AnnotationDecl) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn default_value(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// A class declaration. `fqn` is the dotted qualified name; nested classes
/// name their outer class in `enclosing`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ClassDecl {
    pub fqn: String,
    #[serde(default)]
    pub kind: PsiClassKind,
    #[serde(default)]
    pub enclosing: Option<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParamDecl>,
    #[serde(default)]
    pub super_class: Option<TypeSpec>,
    #[serde(default)]
    pub interfaces: Vec<TypeSpec>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDecl>,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

impl ClassDecl {
    pub fn new(fqn: impl Into<String>) -> Self {
        Self {
            fqn: fqn.into(),
            ..Default::default()
        }
    }

    pub fn interface(fqn: impl Into<String>) -> Self {
        Self {
            fqn: fqn.into(),
            kind: PsiClassKind::Interface,
            ..Default::default()
        }
    }

    pub fn annotation_type(fqn: impl Into<String>) -> Self {
        Self {
            fqn: fqn.into(),
            kind: PsiClassKind::Annotation,
            ..Default::default()
        }
    }

    pub fn nested_in(mut self, outer: impl Into<String>) -> Self {
        self.enclosing = Some(outer.into());
        self
    }

    pub fn type_param(mut self, param: TypeParamDecl) -> Self {
        self.type_parameters.push(param);
        self
    }

    pub fn extends(mut self, ty: TypeSpec) -> Self {
        self.super_class = Some(ty);
        self
    }

    pub fn implements(mut self, ty: TypeSpec) -> Self {
        self.interfaces.push(ty);
        self
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn annotated(mut self, annotation: AnnotationDecl) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PackageDecl {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<AnnotationDecl>,
}

/// Top-level fixture document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProgramDecl {
    #[serde(default)]
    pub packages: Vec<PackageDecl>,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}
