mod common;

use common::{int, string};
use mirrorscope_java::psi::TypeSpec;
use mirrorscope_java::{JeConverter, JeType, MirrorConfig, ProgramModel};

#[test]
fn test_render_declared_and_array_types() {
    let mut arena = common::jdk();
    let map = arena.intern_spec(
        &TypeSpec::generic("java.util.Map", vec![string(), TypeSpec::array(int())]),
        None,
    );
    let nested = arena.intern_spec(&TypeSpec::array(TypeSpec::array(string())), None);
    let cx = JeConverter::new(&arena);

    assert_eq!(cx.convert(map).to_string(), "java.util.Map<java.lang.String,int[]>");
    assert_eq!(cx.convert(nested).to_string(), "java.lang.String[][]");
}

#[test]
fn test_render_wildcards() {
    let mut arena = common::jdk();
    let list = arena.intern_spec(
        &TypeSpec::generic(
            "java.util.List",
            vec![TypeSpec::extends(TypeSpec::class("java.lang.Number"))],
        ),
        None,
    );
    let lower = arena.intern_spec(&TypeSpec::super_of(TypeSpec::class("java.lang.Integer")), None);
    let unbounded = arena.intern_spec(&TypeSpec::unbounded(), None);
    let cx = JeConverter::new(&arena);

    assert_eq!(
        cx.convert(list).to_string(),
        "java.util.List<? extends java.lang.Number>"
    );
    assert_eq!(cx.convert(lower).to_string(), "? super java.lang.Integer");
    assert_eq!(cx.convert(unbounded).to_string(), "?");

    let synthesized = JeType::wildcard_with_bounds(cx.java_lang_object(), JeType::Null);
    assert_eq!(synthesized.to_string(), "? extends java.lang.Object");
}

#[test]
fn test_render_sentinels() {
    assert_eq!(JeType::None.to_string(), "<none>");
    assert_eq!(JeType::Null.to_string(), "<nulltype>");
    assert_eq!(JeType::Error.to_string(), "<error>");
    assert_eq!(JeType::Package.to_string(), "package");

    let mut arena = common::jdk();
    let missing = arena.intern_spec(&TypeSpec::class("com.missing.Gone"), None);
    let cx = JeConverter::new(&arena);
    assert_eq!(cx.convert(missing).to_string(), "<error>");
}

#[test]
fn test_render_type_variables_intersections_and_executables() {
    let arena = common::jdk();
    let bounded = arena.find_class("com.example.Bounded").unwrap();
    let max = arena.find_method(bounded, "max", 2).unwrap();
    let t = arena.class(bounded).unwrap().type_parameters[0].ty;
    let cx = JeConverter::new(&arena);

    let t = cx.convert(t);
    assert_eq!(t.to_string(), "T");
    assert_eq!(
        t.as_type_var().unwrap().upper_bound().to_string(),
        "java.lang.Number & java.lang.Comparable<T>"
    );
    assert_eq!(cx.convert_executable(max).to_string(), "(T,T)T");
    assert_eq!(
        cx.convert(arena.class_type(bounded).unwrap()).to_string(),
        "com.example.Bounded<T,U,S>"
    );
}

#[test]
fn test_render_stops_at_max_depth() {
    let mut arena = common::jdk();
    let deep = arena.intern_spec(
        &TypeSpec::generic(
            "java.util.List",
            vec![TypeSpec::generic(
                "java.util.List",
                vec![TypeSpec::generic("java.util.List", vec![string()])],
            )],
        ),
        None,
    );
    let shallow = JeConverter::with_config(&arena, MirrorConfig::default().with_max_depth(1));
    assert_eq!(
        shallow.convert(deep).to_string(),
        "java.util.List<java.util.List<...>>"
    );

    let cx = JeConverter::new(&arena);
    assert_eq!(
        cx.convert(deep).to_string(),
        "java.util.List<java.util.List<java.util.List<java.lang.String>>>"
    );
}
