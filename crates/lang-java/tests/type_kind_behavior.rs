mod common;

use common::{int, string};
use mirrorscope_java::mirror::primitives;
use mirrorscope_java::psi::{PsiPrimitiveType, PsiTypeId, TypeSpec};
use mirrorscope_java::{
    JeConverter, JeType, MirrorConfig, PrimitiveKind, ProgramModel, TypeKind, TypeMirror,
    TypeVariableMode,
};

#[test]
fn test_classify_is_total_and_matches_converted_kind() {
    let mut arena = common::jdk();
    let missing = arena.intern_spec(&TypeSpec::class("com.missing.Gone"), None);
    let union = {
        let a = arena.intern_spec(&TypeSpec::class("java.lang.Exception"), None);
        let b = arena.intern_spec(&TypeSpec::class("java.lang.Throwable"), None);
        arena.disjunction(vec![a, b])
    };
    let unbounded = arena.intern_spec(&TypeSpec::unbounded(), None);
    let total = arena.type_count() as u32;

    for config in [
        MirrorConfig::default(),
        MirrorConfig::default().with_type_variables(TypeVariableMode::Error),
    ] {
        let cx = JeConverter::with_config(&arena, config);
        // Include a few handles past the end of the arena.
        for raw in 0..total + 4 {
            let ty = PsiTypeId(raw);
            assert_eq!(cx.convert(ty).kind(), cx.classify(ty), "handle {}", raw);
        }
        assert_eq!(cx.classify(missing), TypeKind::Error);
        assert_eq!(cx.classify(union), TypeKind::Error);
        assert_eq!(cx.classify(unbounded), TypeKind::Wildcard);
        assert_eq!(cx.classify(PsiTypeId(total + 100)), TypeKind::Error);
    }
}

#[test]
fn test_each_native_primitive_maps_to_its_interned_mirror() {
    let mut arena = common::jdk();
    let ids: Vec<_> = PsiPrimitiveType::ALL
        .into_iter()
        .map(|p| (p, arena.primitive(p)))
        .collect();
    let cx = JeConverter::new(&arena);

    for (native, id) in ids {
        let ty = cx.convert(id);
        let mirror = ty.as_primitive().expect("primitive mirror");
        assert_eq!(mirror.native(), native);
        let kind = mirror.primitive_kind();
        assert_eq!(ty.kind(), TypeKind::Primitive(kind));
        assert_eq!(kind.keyword(), native.canonical_text());
        assert!(std::ptr::eq(mirror, primitives::lookup_by_subkind(kind).unwrap()));
        assert!(std::ptr::eq(
            mirror,
            primitives::lookup_by_kind(TypeKind::Primitive(kind)).unwrap()
        ));
    }
}

#[test]
fn test_primitive_mirror_is_the_same_instance_across_conversions() {
    let mut arena = common::jdk();
    let first = arena.primitive(PsiPrimitiveType::Int);
    let second = arena.intern_spec(&int(), None);
    let cx = JeConverter::new(&arena);
    let a = cx.convert(first);
    let b = cx.convert(second);
    assert!(std::ptr::eq(a.as_primitive().unwrap(), b.as_primitive().unwrap()));
    assert_eq!(a, b);
}

#[test]
fn test_composite_kinds() {
    let mut arena = common::jdk();
    let array = arena.intern_spec(&TypeSpec::array(string()), None);
    let wildcard = arena.intern_spec(&TypeSpec::extends(TypeSpec::class("java.lang.Number")), None);
    let declared = arena.intern_spec(&TypeSpec::generic("java.util.List", vec![string()]), None);
    let intersection = {
        let a = arena.intern_spec(&TypeSpec::class("java.lang.Number"), None);
        let b = arena.intern_spec(&TypeSpec::class("java.io.Serializable"), None);
        arena.intersection(vec![a, b])
    };
    let null = arena.null();
    let cx = JeConverter::new(&arena);

    assert_eq!(cx.classify(array), TypeKind::Array);
    assert_eq!(cx.classify(wildcard), TypeKind::Wildcard);
    assert_eq!(cx.classify(declared), TypeKind::Declared);
    assert_eq!(cx.classify(intersection), TypeKind::Intersection);
    assert_eq!(cx.classify(null), TypeKind::Null);
    assert!(matches!(cx.convert(null), JeType::Null));
}

#[test]
fn test_unresolved_reference_converts_to_declared_error() {
    let mut arena = common::jdk();
    let missing = arena.intern_spec(
        &TypeSpec::generic("com.missing.Box", vec![string()]),
        None,
    );
    let cx = JeConverter::new(&arena);

    let ty = cx.convert(missing);
    assert!(matches!(ty, JeType::DeclaredError(_)));
    assert_eq!(ty.kind(), TypeKind::Error);
    assert!(ty.is_no_type());

    let declared = ty.as_declared().expect("declared view of the error type");
    assert!(declared.type_arguments().is_empty());
    assert!(declared.as_element().is_none());
    assert_eq!(declared.enclosing_type().kind(), TypeKind::None);
}

#[test]
fn test_type_variable_mode_controls_kind() {
    let arena = common::jdk();
    let list = arena.find_class("java.util.List").unwrap();
    let element_var = arena.class(list).unwrap().type_parameters[0].ty;

    let first_class = JeConverter::new(&arena);
    assert_eq!(first_class.classify(element_var), TypeKind::TypeVar);
    assert_eq!(first_class.convert(element_var).kind(), TypeKind::TypeVar);

    let legacy = JeConverter::with_config(
        &arena,
        MirrorConfig::default().with_type_variables(TypeVariableMode::Error),
    );
    assert_eq!(legacy.classify(element_var), TypeKind::Error);
    assert!(matches!(legacy.convert(element_var), JeType::Error));
}

#[test]
fn test_disjunction_and_dangling_handles_are_errors() {
    let mut arena = common::jdk();
    let a = arena.intern_spec(&TypeSpec::class("java.lang.Exception"), None);
    let b = arena.intern_spec(&string(), None);
    let union = arena.disjunction(vec![a, b]);
    let cx = JeConverter::new(&arena);

    assert!(matches!(cx.convert(union), JeType::Error));
    assert!(matches!(cx.convert(PsiTypeId(u32::MAX)), JeType::Error));
    assert!(matches!(
        cx.convert_executable(mirrorscope_java::psi::PsiMethodId(u32::MAX)),
        JeType::Error
    ));
}

#[test]
fn test_sentinel_constructors() {
    let arena = common::jdk();
    let cx = JeConverter::new(&arena);
    assert_eq!(cx.package_type().kind(), TypeKind::Package);
    assert_eq!(cx.none_type().kind(), TypeKind::None);
    assert_eq!(cx.null_type().kind(), TypeKind::Null);
    assert!(cx.package_type().is_no_type());
    assert!(cx.none_type().is_no_type());
    assert!(!cx.null_type().is_no_type());
    assert_eq!(cx.java_lang_object().kind(), TypeKind::Declared);
}

#[test]
fn test_kind_lookup_by_kind_rejects_non_primitives() {
    assert!(primitives::lookup_by_kind(TypeKind::Array).is_none());
    assert!(primitives::lookup_by_kind(TypeKind::Primitive(PrimitiveKind::Void)).is_some());
}

#[test]
fn test_array_component_kind_matches_classify() {
    let mut arena = common::jdk();
    let components = [
        int(),
        string(),
        TypeSpec::array(int()),
        TypeSpec::class("com.missing.Gone"),
        TypeSpec::generic("java.util.List", vec![TypeSpec::unbounded()]),
    ];
    let pairs: Vec<_> = components
        .iter()
        .map(|c| {
            let component = arena.intern_spec(c, None);
            (component, arena.array_of(component))
        })
        .collect();
    let cx = JeConverter::new(&arena);

    for (component, array) in pairs {
        let ty = cx.convert(array);
        let read_back = ty.as_array().unwrap().component_type();
        assert_eq!(read_back.kind(), cx.classify(component));
        assert_eq!(read_back, cx.convert(component));
    }
}
