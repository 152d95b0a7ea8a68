use mirrorscope_java::psi::{
    AnnotationDecl, ClassDecl, MethodDecl, PackageDecl, PsiArena, PsiPrimitiveType, TypeParamDecl,
    TypeSpec,
};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; `RUST_LOG` controls the level.
#[allow(dead_code)]
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

#[allow(dead_code)]
pub fn int() -> TypeSpec {
    TypeSpec::primitive(PsiPrimitiveType::Int)
}

#[allow(dead_code)]
pub fn string() -> TypeSpec {
    TypeSpec::class("java.lang.String")
}

#[allow(dead_code)]
pub fn object() -> TypeSpec {
    TypeSpec::class("java.lang.Object")
}

/// A program fixture built with a fluent API.
#[derive(Default)]
pub struct Fixture {
    packages: Vec<PackageDecl>,
    classes: Vec<ClassDecl>,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A small slice of the JDK plus a `com.example` hierarchy.
    pub fn jdk() -> Self {
        Self::new()
            .class(
                ClassDecl::new("java.lang.Object")
                    .method(MethodDecl::new("toString").returns(string()))
                    .method(MethodDecl::new("hashCode").returns(int())),
            )
            .class(ClassDecl::interface("java.io.Serializable"))
            .class(
                ClassDecl::interface("java.lang.Comparable")
                    .type_param(TypeParamDecl::new("T"))
                    .method(
                        MethodDecl::new("compareTo")
                            .returns(int())
                            .param("o", TypeSpec::var("T")),
                    ),
            )
            .class(
                ClassDecl::new("java.lang.String")
                    .extends(object())
                    .implements(TypeSpec::class("java.io.Serializable"))
                    .implements(TypeSpec::generic("java.lang.Comparable", vec![string()]))
                    .method(MethodDecl::new("length").returns(int()))
                    .method(
                        MethodDecl::new("charAt")
                            .returns(TypeSpec::primitive(PsiPrimitiveType::Char))
                            .param("index", int()),
                    ),
            )
            .class(
                ClassDecl::new("java.lang.Number")
                    .extends(object())
                    .implements(TypeSpec::class("java.io.Serializable"))
                    .method(MethodDecl::new("intValue").returns(int())),
            )
            .class(
                ClassDecl::new("java.lang.Integer")
                    .extends(TypeSpec::class("java.lang.Number"))
                    .implements(TypeSpec::generic(
                        "java.lang.Comparable",
                        vec![TypeSpec::class("java.lang.Integer")],
                    )),
            )
            .class(ClassDecl::new("java.lang.Throwable").extends(object()))
            .class(ClassDecl::new("java.lang.Exception").extends(TypeSpec::class("java.lang.Throwable")))
            .class(
                ClassDecl::interface("java.util.List")
                    .type_param(TypeParamDecl::new("E"))
                    .method(
                        MethodDecl::new("get")
                            .returns(TypeSpec::var("E"))
                            .param("index", int()),
                    ),
            )
            .class(
                ClassDecl::interface("java.util.Map")
                    .type_param(TypeParamDecl::new("K"))
                    .type_param(TypeParamDecl::new("V"))
                    .method(
                        MethodDecl::new("put")
                            .returns(TypeSpec::var("V"))
                            .param("key", TypeSpec::var("K"))
                            .param("value", TypeSpec::var("V")),
                    ),
            )
            .class(
                ClassDecl::interface("java.util.Map.Entry")
                    .nested_in("java.util.Map")
                    .type_param(TypeParamDecl::new("K"))
                    .type_param(TypeParamDecl::new("V"))
                    .method(MethodDecl::new("getKey").returns(TypeSpec::var("K"))),
            )
            .class(ClassDecl::annotation_type("java.lang.Deprecated"))
            .class(ClassDecl::annotation_type("java.lang.annotation.Inherited"))
            .package(PackageDecl {
                name: "com.example".to_string(),
                annotations: vec![AnnotationDecl::new("java.lang.Deprecated")],
            })
            .class(
                ClassDecl::annotation_type("com.example.Marker")
                    .annotated(AnnotationDecl::new("java.lang.annotation.Inherited")),
            )
            .class(ClassDecl::annotation_type("com.example.Plain"))
            .class(
                ClassDecl::new("com.example.Base")
                    .extends(object())
                    .annotated(AnnotationDecl::new("com.example.Marker"))
                    .annotated(AnnotationDecl::new("com.example.Plain"))
                    .method(MethodDecl::constructor())
                    .method(MethodDecl::new("describe").returns(string()))
                    .method(MethodDecl::new("count").returns(int()).param("n", int())),
            )
            .class(
                ClassDecl::new("com.example.Derived")
                    .extends(TypeSpec::class("com.example.Base"))
                    .annotated(AnnotationDecl::new("java.lang.Deprecated"))
                    .method(MethodDecl::new("describe").returns(string()))
                    .method(
                        MethodDecl::new("count")
                            .returns(int())
                            .param("n", TypeSpec::primitive(PsiPrimitiveType::Long)),
                    ),
            )
            .class(ClassDecl::new("com.example.Leaf").extends(TypeSpec::class("com.example.Derived")))
            .class(
                ClassDecl::new("com.example.Twig")
                    .extends(TypeSpec::class("com.example.Leaf"))
                    .method(MethodDecl::new("describe").returns(string()))
                    .method(MethodDecl::new("hashCode").returns(int())),
            )
            .class(
                ClassDecl::annotation_type("com.example.Level")
                    .method(
                        MethodDecl::new("value")
                            .returns(int())
                            .default_value(serde_json::json!(1)),
                    )
                    .method(
                        MethodDecl::new("tag")
                            .returns(string())
                            .default_value(serde_json::json!("none")),
                    )
                    .method(MethodDecl::new("scope").returns(string())),
            )
            .class(
                ClassDecl::new("com.example.Bounded")
                    .extends(object())
                    .type_param(TypeParamDecl::bounded(
                        "T",
                        vec![
                            TypeSpec::class("java.lang.Number"),
                            TypeSpec::generic("java.lang.Comparable", vec![TypeSpec::var("T")]),
                        ],
                    ))
                    .type_param(TypeParamDecl::new("U"))
                    .type_param(TypeParamDecl::bounded("S", vec![string()]))
                    .method(
                        MethodDecl::new("max")
                            .returns(TypeSpec::var("T"))
                            .param("a", TypeSpec::var("T"))
                            .param("b", TypeSpec::var("T"))
                            .throws(TypeSpec::class("java.lang.Exception")),
                    ),
            )
    }

    pub fn class(mut self, decl: ClassDecl) -> Self {
        self.classes.push(decl);
        self
    }

    pub fn package(mut self, decl: PackageDecl) -> Self {
        self.packages.push(decl);
        self
    }

    pub fn build(self) -> PsiArena {
        init_tracing();
        let mut arena = PsiArena::new();
        for package in self.packages {
            arena.add_package(package);
        }
        arena
            .add_classes(self.classes)
            .expect("fixture classes should load");
        arena
    }
}

#[allow(dead_code)]
pub fn jdk() -> PsiArena {
    Fixture::jdk().build()
}
