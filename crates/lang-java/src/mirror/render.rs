use super::{DeclaredTypeMirror, JeType};
use crate::config::DEFAULT_MAX_DEPTH;
use mirrorscope_api::{TypeKind, TypeMirror};

struct Renderer {
    out: String,
    max_depth: usize,
    truncated: bool,
}

pub(super) fn render(ty: &JeType<'_>) -> String {
    let max_depth = ty
        .converter()
        .map(|cx| cx.config().max_depth)
        .unwrap_or(DEFAULT_MAX_DEPTH);
    let mut renderer = Renderer {
        out: String::new(),
        max_depth,
        truncated: false,
    };
    renderer.write(ty, 0);
    if renderer.truncated {
        tracing::warn!("type rendering exceeded max depth {}", max_depth);
    }
    renderer.out
}

impl Renderer {
    fn write(&mut self, ty: &JeType<'_>, depth: usize) {
        if depth > self.max_depth {
            self.truncated = true;
            self.out.push_str("...");
            return;
        }

        match ty {
            JeType::Primitive(p) => self.out.push_str(p.primitive_kind().keyword()),
            JeType::Null => self.out.push_str("<nulltype>"),
            JeType::None => self.out.push_str("<none>"),
            JeType::Package => self.out.push_str("package"),
            JeType::Error | JeType::DeclaredError(_) => self.out.push_str("<error>"),
            JeType::Array(array) => {
                self.write(&array.component_type(), depth + 1);
                self.out.push_str("[]");
            }
            JeType::Wildcard(wildcard) => {
                self.out.push('?');
                let bound = match wildcard.native_type() {
                    Some(_) => wildcard.native_bound(),
                    None => {
                        let super_bound = wildcard.super_bound();
                        if super_bound.kind() == TypeKind::Null {
                            Some((wildcard.extends_bound(), true))
                        } else {
                            Some((super_bound, false))
                        }
                    }
                };
                if let Some((bound, extends)) = bound {
                    self.out.push_str(if extends { " extends " } else { " super " });
                    self.write(&bound, depth + 1);
                }
            }
            JeType::Intersection(intersection) => {
                self.write_list(&intersection.bounds(), " & ", depth);
            }
            JeType::Declared(declared) => {
                let name = declared
                    .as_element()
                    .map(|e| e.qualified_name())
                    .or_else(|| declared.reference_name())
                    .unwrap_or("<error>");
                self.out.push_str(name);
                let arguments = declared.type_arguments();
                if !arguments.is_empty() {
                    self.out.push('<');
                    self.write_list(&arguments, ",", depth);
                    self.out.push('>');
                }
            }
            JeType::TypeVar(variable) => self.out.push_str(variable.name()),
            JeType::Executable(executable) => {
                self.out.push('(');
                self.write_list(&executable.parameter_types(), ",", depth);
                self.out.push(')');
                self.write(&executable.return_type(), depth + 1);
            }
        }
    }

    fn write_list(&mut self, items: &[JeType<'_>], separator: &str, depth: usize) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(separator);
            }
            self.write(item, depth + 1);
        }
    }
}
