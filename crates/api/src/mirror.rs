use crate::models::{AnnotationMirror, TypeKind};

/// Constructs that may carry annotations.
pub trait AnnotatedConstruct {
    fn annotation_mirrors(&self) -> Vec<AnnotationMirror>;

    /// Find an annotation by the fully qualified name of its class.
    fn annotation(&self, fqn: &str) -> Option<AnnotationMirror> {
        self.annotation_mirrors().into_iter().find(|a| a.is(fqn))
    }
}

/// Minimal capability shared by every type representation.
///
/// Type-level annotations are not modeled, so the default annotation
/// list is empty.
pub trait TypeMirror {
    fn kind(&self) -> TypeKind;

    fn annotation_mirrors(&self) -> Vec<AnnotationMirror> {
        Vec::new()
    }
}
