use super::JeType;

/// Which visitor entry point a mirror dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Generic,
    NoType,
}

/// Two-level visitor over type mirrors.
///
/// `visit` is the catch-all. `NONE` and `PACKAGE` mirrors route to
/// `visit_no_type`, which falls back to `visit` unless overridden.
pub trait TypeVisitor<'a, R, P> {
    fn visit(&mut self, ty: &JeType<'a>, p: P) -> R;

    fn visit_no_type(&mut self, ty: &JeType<'a>, p: P) -> R {
        self.visit(ty, p)
    }
}
