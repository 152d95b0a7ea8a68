//! Element utilities: lookups, naming, annotation inheritance, member
//! hiding and overriding, and constant formatting.

use crate::convert::JeConverter;
use crate::element::{Element, ExecutableElement, PackageElement, TypeElement};
use crate::psi::PsiClassId;
use indexmap::IndexMap;
use mirrorscope_api::{AnnotatedConstruct, AnnotationMirror};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::{self, Write};

pub const JAVA_LANG_DEPRECATED: &str = "java.lang.Deprecated";
pub const JAVA_LANG_ANNOTATION_INHERITED: &str = "java.lang.annotation.Inherited";

/// Separator between an outer class and a nested one in binary names.
pub const BINARY_NESTING_SEPARATOR: char = '$';

#[derive(Debug, Clone, Copy)]
pub struct JeElements<'a> {
    cx: &'a JeConverter<'a>,
}

impl<'a> JeElements<'a> {
    pub fn new(cx: &'a JeConverter<'a>) -> Self {
        Self { cx }
    }

    pub fn type_element(&self, name: &str) -> Option<TypeElement<'a>> {
        let id = self.cx.model().find_class(name)?;
        TypeElement::new(self.cx, id)
    }

    pub fn package_element(&self, name: &str) -> Option<PackageElement<'a>> {
        PackageElement::new(self.cx, name)
    }

    /// `a.b.Outer$Inner` for nested classes, the qualified name otherwise.
    pub fn binary_name(&self, element: &TypeElement<'a>) -> String {
        match element.enclosing_element() {
            Some(Element::Type(outer)) => format!(
                "{}{}{}",
                self.binary_name(&outer),
                BINARY_NESTING_SEPARATOR,
                element.simple_name()
            ),
            _ => element.qualified_name().to_string(),
        }
    }

    pub fn package_of(&self, element: &Element<'a>) -> Option<PackageElement<'a>> {
        let mut current = *element;
        loop {
            match current {
                Element::Package(package) => return Some(package),
                other => current = other.enclosing_element()?,
            }
        }
    }

    pub fn is_deprecated(&self, element: &Element<'a>) -> bool {
        element.annotation(JAVA_LANG_DEPRECATED).is_some()
    }

    /// Declared annotations, followed for type elements by the
    /// `@Inherited` annotations of every superclass.
    pub fn all_annotation_mirrors(&self, element: &Element<'a>) -> Vec<AnnotationMirror> {
        let mut annotations = element.annotation_mirrors();
        let Element::Type(type_element) = element else {
            return annotations;
        };

        for parent in self.superclasses(type_element) {
            for annotation in &parent.psi().annotations {
                if self.is_inherited_annotation(&annotation.qualified_name) {
                    annotations.push(AnnotationMirror {
                        annotation_type: annotation.qualified_name.clone(),
                        element_values: annotation.attributes.clone(),
                    });
                }
            }
        }
        annotations
    }

    fn is_inherited_annotation(&self, annotation_type: &str) -> bool {
        self.type_element(annotation_type).is_some_and(|class| {
            class
                .psi()
                .find_annotation(JAVA_LANG_ANNOTATION_INHERITED)
                .is_some()
        })
    }

    /// Superclass chain, nearest first. Stops at the first unresolved or
    /// repeated class.
    fn superclasses(&self, element: &TypeElement<'a>) -> Vec<TypeElement<'a>> {
        let mut visited: HashSet<PsiClassId> = HashSet::from([element.id()]);
        let mut chain = Vec::new();
        let mut current = *element;
        while let Some(parent) = self.superclass_element(&current) {
            if !visited.insert(parent.id()) {
                tracing::warn!("cyclic superclass chain at {}", parent.qualified_name());
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain
    }

    fn superclass_element(&self, element: &TypeElement<'a>) -> Option<TypeElement<'a>> {
        let super_class = element.psi().super_class?;
        let id = self.cx.model().resolve(super_class)?;
        TypeElement::new(self.cx, id)
    }

    /// Whether method `hider` hides `hidden` declared in a direct supertype
    /// of its class. Elements other than executables never hide.
    pub fn hides(&self, hider: &Element<'a>, hidden: &Element<'a>) -> bool {
        match (hider, hidden) {
            (Element::Executable(hider), Element::Executable(hidden)) => {
                self.method_hides(hider, hidden)
            }
            _ => false,
        }
    }

    fn method_hides(&self, hider: &ExecutableElement<'a>, hidden: &ExecutableElement<'a>) -> bool {
        let (a, b) = (hider.psi(), hidden.psi());
        if a.name != b.name || a.parameters.len() != b.parameters.len() {
            return false;
        }

        let model = self.cx.model();
        let Some(hider_class) = model.class(a.containing_class) else {
            return false;
        };
        let direct_supertype = hider_class
            .super_types()
            .any(|ty| model.resolve(ty) == Some(b.containing_class));
        direct_supertype && self.same_signature(hider, hidden)
    }

    /// Same name, return type and parameter types.
    fn same_signature(&self, a: &ExecutableElement<'a>, b: &ExecutableElement<'a>) -> bool {
        let (p, q) = (a.psi(), b.psi());
        if p.name != q.name || p.parameters.len() != q.parameters.len() {
            return false;
        }
        if a.return_type() != b.return_type() {
            return false;
        }
        p.parameters
            .iter()
            .zip(&q.parameters)
            .all(|(x, y)| self.cx.convert(x.ty) == self.cx.convert(y.ty))
    }

    /// Whether `overrider`, as a member of `type_element`, overrides
    /// `overridden` declared in a proper supertype of its class.
    pub fn overrides(
        &self,
        overrider: &Element<'a>,
        overridden: &Element<'a>,
        type_element: &TypeElement<'a>,
    ) -> bool {
        let (Element::Executable(overrider), Element::Executable(overridden)) =
            (overrider, overridden)
        else {
            return false;
        };
        let (a, b) = (overrider.psi(), overridden.psi());
        if a.is_constructor || b.is_constructor {
            return false;
        }
        let restricted = |modifiers: &[String]| {
            modifiers.iter().any(|m| m == "static" || m == "private")
        };
        if restricted(a.modifiers.as_slice()) || restricted(b.modifiers.as_slice()) {
            return false;
        }
        if a.containing_class == b.containing_class
            || !self.is_subclass(a.containing_class, b.containing_class)
        {
            return false;
        }
        if type_element.id() != a.containing_class
            && !self.is_subclass(type_element.id(), a.containing_class)
        {
            return false;
        }
        self.same_signature(overrider, overridden)
    }

    /// Whether `sup` is reachable from `sub` through supertypes.
    fn is_subclass(&self, sub: PsiClassId, sup: PsiClassId) -> bool {
        let model = self.cx.model();
        let mut visited = HashSet::from([sub]);
        let mut pending = vec![sub];
        while let Some(id) = pending.pop() {
            let Some(class) = model.class(id) else {
                continue;
            };
            for parent in class.super_types().filter_map(|ty| model.resolve(ty)) {
                if parent == sup {
                    return true;
                }
                if visited.insert(parent) {
                    pending.push(parent);
                }
            }
        }
        false
    }

    /// Declared methods, then methods inherited along the superclass chain
    /// whose signature no collected method already has.
    pub fn all_members(&self, element: &TypeElement<'a>) -> Vec<ExecutableElement<'a>> {
        let mut members = element.methods();

        for parent in self.superclasses(element) {
            for method in parent.methods() {
                if method.psi().is_constructor {
                    continue;
                }
                let overridden = members
                    .iter()
                    .any(|m| !m.psi().is_constructor && self.same_signature(m, &method));
                if !overridden {
                    members.push(method);
                }
            }
        }
        members
    }

    /// Element values of `annotation` in the declaration order of its
    /// annotation type, with defaults filled in for missing elements.
    /// Values for undeclared names follow.
    pub fn element_values_with_defaults(
        &self,
        annotation: &AnnotationMirror,
    ) -> IndexMap<String, Value> {
        let Some(class) = self.type_element(&annotation.annotation_type) else {
            return annotation.element_values.clone();
        };

        let mut values = IndexMap::new();
        for method in class.methods() {
            let psi = method.psi();
            if psi.is_constructor {
                continue;
            }
            let value = annotation
                .element_values
                .get(&psi.name)
                .or(psi.default_value.as_ref());
            if let Some(value) = value {
                values.insert(psi.name.clone(), value.clone());
            }
        }
        for (name, value) in &annotation.element_values {
            if !values.contains_key(name) {
                values.insert(name.clone(), value.clone());
            }
        }
        values
    }

    /// Source form of a constant value: `42`, `42L`, `1.5`, `true`,
    /// `"text"` or `null`. Arrays, objects and integers beyond `long`
    /// have no constant form.
    pub fn constant_expression(&self, value: &Value) -> Option<String> {
        match value {
            Value::Null => Some("null".to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i32::try_from(i).is_ok() {
                        Some(i.to_string())
                    } else {
                        Some(format!("{}L", i))
                    }
                } else if n.is_u64() {
                    None
                } else {
                    n.as_f64().map(|f| format!("{:?}", f))
                }
            }
            Value::String(text) => Some(quote(text)),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Sources carry no doc model, so there is never a comment.
    pub fn doc_comment(&self, _element: &Element<'a>) -> Option<String> {
        None
    }

    /// One `simple_name (kind)` line per element.
    pub fn print_elements<W: Write>(
        &self,
        writer: &mut W,
        elements: &[Element<'a>],
    ) -> io::Result<()> {
        for element in elements {
            writeln!(writer, "{} ({})", element.simple_name(), element.kind())?;
        }
        writer.flush()
    }
}

/// Double-quoted literal with escapes for quotes, backslashes, control
/// characters and non-ASCII UTF-16 units.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            ' '..='~' => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04x}", unit);
                }
            }
        }
    }
    out.push('"');
    out
}
