//! Process-wide interning table for primitive mirrors.

use crate::psi::{PsiPrimitiveType, PsiType};
use mirrorscope_api::{PrimitiveKind, TypeKind, TypeMirror};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical mirror of a primitive type. One instance exists per kind.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveType {
    native: PsiPrimitiveType,
}

impl PrimitiveType {
    pub fn native(&self) -> PsiPrimitiveType {
        self.native
    }

    pub fn primitive_kind(&self) -> PrimitiveKind {
        match self.native {
            PsiPrimitiveType::Byte => PrimitiveKind::Byte,
            PsiPrimitiveType::Char => PrimitiveKind::Char,
            PsiPrimitiveType::Double => PrimitiveKind::Double,
            PsiPrimitiveType::Float => PrimitiveKind::Float,
            PsiPrimitiveType::Int => PrimitiveKind::Int,
            PsiPrimitiveType::Long => PrimitiveKind::Long,
            PsiPrimitiveType::Short => PrimitiveKind::Short,
            PsiPrimitiveType::Boolean => PrimitiveKind::Boolean,
            PsiPrimitiveType::Void => PrimitiveKind::Void,
        }
    }
}

impl TypeMirror for PrimitiveType {
    fn kind(&self) -> TypeKind {
        TypeKind::Primitive(self.primitive_kind())
    }
}

static PSI_PRIMITIVES: Lazy<HashMap<PsiPrimitiveType, PrimitiveType>> = Lazy::new(|| {
    PsiPrimitiveType::ALL
        .into_iter()
        .map(|native| (native, PrimitiveType { native }))
        .collect()
});

static KIND_TO_PSI_PRIMITIVE: Lazy<HashMap<PrimitiveKind, PsiPrimitiveType>> = Lazy::new(|| {
    HashMap::from([
        (PrimitiveKind::Byte, PsiPrimitiveType::Byte),
        (PrimitiveKind::Char, PsiPrimitiveType::Char),
        (PrimitiveKind::Double, PsiPrimitiveType::Double),
        (PrimitiveKind::Float, PsiPrimitiveType::Float),
        (PrimitiveKind::Int, PsiPrimitiveType::Int),
        (PrimitiveKind::Long, PsiPrimitiveType::Long),
        (PrimitiveKind::Short, PsiPrimitiveType::Short),
        (PrimitiveKind::Boolean, PsiPrimitiveType::Boolean),
        (PrimitiveKind::Void, PsiPrimitiveType::Void),
    ])
});

pub fn lookup_by_psi(native: PsiPrimitiveType) -> Option<&'static PrimitiveType> {
    PSI_PRIMITIVES.get(&native)
}

/// Singleton for a native shape; `None` unless the shape is primitive.
pub fn lookup_by_native(shape: &PsiType) -> Option<&'static PrimitiveType> {
    match shape {
        PsiType::Primitive(native) => lookup_by_psi(*native),
        _ => None,
    }
}

pub fn lookup_by_subkind(kind: PrimitiveKind) -> Option<&'static PrimitiveType> {
    KIND_TO_PSI_PRIMITIVE.get(&kind).and_then(|native| lookup_by_psi(*native))
}

/// Singleton for a type kind; `None` for non-primitive kinds.
pub fn lookup_by_kind(kind: TypeKind) -> Option<&'static PrimitiveType> {
    kind.as_primitive().and_then(lookup_by_subkind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_directions_yield_the_same_instance() {
        for native in PsiPrimitiveType::ALL {
            let by_native = lookup_by_native(&PsiType::Primitive(native)).unwrap();
            let by_kind = lookup_by_subkind(by_native.primitive_kind()).unwrap();
            assert!(std::ptr::eq(by_native, by_kind), "{:?}", native);
            assert_eq!(by_native.native(), native);
        }
    }

    #[test]
    fn test_table_is_a_bijection() {
        let kinds: std::collections::HashSet<_> = PsiPrimitiveType::ALL
            .into_iter()
            .map(|n| lookup_by_psi(n).unwrap().primitive_kind())
            .collect();
        assert_eq!(kinds.len(), PrimitiveKind::ALL.len());
        for kind in PrimitiveKind::ALL {
            assert_eq!(lookup_by_subkind(kind).unwrap().kind(), TypeKind::Primitive(kind));
        }
    }

    #[test]
    fn test_non_primitive_input_misses() {
        assert!(lookup_by_native(&PsiType::Null).is_none());
        assert!(lookup_by_kind(TypeKind::Declared).is_none());
        assert!(lookup_by_kind(TypeKind::Error).is_none());
    }
}
