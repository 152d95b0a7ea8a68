mod common;

use mirrorscope_java::psi::TypeSpec;
use mirrorscope_java::{
    JeConverter, MirrorConfig, ModelError, ProgramModel, PsiArena, TypeKind, TypeMirror,
    TypeVariableMode,
};
use serde_json::json;
use std::io::Write;

fn program() -> serde_json::Value {
    json!({
        "packages": [
            { "name": "demo", "annotations": [{ "name": "demo.Marker" }] }
        ],
        "classes": [
            { "fqn": "java.lang.Object" },
            { "fqn": "demo.Marker", "kind": "annotation" },
            {
                "fqn": "demo.Box",
                "type_parameters": [{ "name": "T" }],
                "super_class": { "kind": "class", "data": { "name": "java.lang.Object" } },
                "methods": [
                    {
                        "name": "get",
                        "return_type": { "kind": "type_var", "data": "T" }
                    },
                    {
                        "name": "set",
                        "parameters": [
                            { "name": "value", "ty": { "kind": "type_var", "data": "T" } }
                        ]
                    }
                ],
                "annotations": [{ "name": "demo.Marker", "values": { "level": 2 } }]
            },
            {
                "fqn": "demo.Box.Lid",
                "enclosing": "demo.Box",
                "kind": "interface",
                "interfaces": [
                    {
                        "kind": "class",
                        "data": {
                            "name": "demo.Box",
                            "args": [{ "kind": "primitive", "data": "int" }]
                        }
                    }
                ]
            }
        ]
    })
}

#[test]
fn test_load_program_from_json() {
    common::init_tracing();
    let arena = PsiArena::from_json(&program().to_string()).unwrap();
    let cx = JeConverter::new(&arena);

    let bx = arena.find_class("demo.Box").unwrap();
    let class = arena.class(bx).unwrap();
    assert_eq!(class.annotations[0].attributes["level"], json!(2));
    assert_eq!(cx.convert(arena.class_type(bx).unwrap()).to_string(), "demo.Box<T>");

    let get = arena.find_method(bx, "get", 0).unwrap();
    assert_eq!(cx.convert_executable(get).to_string(), "()T");
    let set = arena.find_method(bx, "set", 1).unwrap();
    assert_eq!(cx.convert_executable(set).to_string(), "(T)void");

    let lid = arena.find_class("demo.Box.Lid").unwrap();
    let lid_class = arena.class(lid).unwrap();
    assert_eq!(lid_class.containing_class, Some(bx));
    let interface = cx.convert(lid_class.interfaces[0]);
    assert_eq!(interface.to_string(), "demo.Box<int>");

    let package = arena.find_package("demo").unwrap();
    assert_eq!(package.annotations[0].qualified_name, "demo.Marker");
}

#[test]
fn test_load_program_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(program().to_string().as_bytes()).unwrap();
    file.flush().unwrap();

    let arena = PsiArena::load(file.path()).unwrap();
    assert!(arena.find_class("demo.Box.Lid").is_some());
}

#[test]
fn test_loading_errors() {
    let err = PsiArena::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ModelError::Json(_)));

    let dir = tempfile::tempdir().unwrap();
    let err = PsiArena::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));

    let duplicate = json!({ "classes": [{ "fqn": "a.A" }, { "fqn": "a.A" }] });
    let err = PsiArena::from_json(&duplicate.to_string()).unwrap_err();
    assert!(matches!(err, ModelError::DuplicateClass(ref name) if name == "a.A"));
}

#[test]
fn test_interning_after_load_reuses_declared_shapes() {
    let mut arena = PsiArena::from_json(&program().to_string()).unwrap();
    let bx = arena.find_class("demo.Box").unwrap();
    let own = arena.class_type(bx).unwrap();
    let before = arena.type_count();
    let object = arena.intern_spec(&TypeSpec::class("java.lang.Object"), None);
    assert_eq!(arena.type_count(), before);
    assert_eq!(arena.resolve(object), arena.find_class("java.lang.Object"));
    assert_ne!(own, object);
}

#[test]
fn test_config_from_json() {
    let config = MirrorConfig::from_json(r#"{ "type_variables": "error" }"#).unwrap();
    assert_eq!(config.type_variables, TypeVariableMode::Error);
    assert_eq!(config.max_depth, MirrorConfig::default().max_depth);

    let arena = PsiArena::from_json(&program().to_string()).unwrap();
    let bx = arena.find_class("demo.Box").unwrap();
    let t = arena.class(bx).unwrap().type_parameters[0].ty;
    let cx = JeConverter::with_config(&arena, config);
    assert_eq!(cx.convert(t).kind(), TypeKind::Error);

    assert!(MirrorConfig::from_json(r#"{ "max_depth": "deep" }"#).is_err());
}
