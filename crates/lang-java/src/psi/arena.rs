use super::decl::{ClassDecl, MethodDecl, PackageDecl, ProgramDecl, TypeSpec};
use super::{
    PsiClass, PsiClassId, PsiMethod, PsiMethodId, PsiPackage, PsiParameter, PsiPrimitiveType,
    PsiType, PsiTypeId, PsiTypeParameter, ProgramModel,
};
use crate::error::{ModelError, Result};
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// In-memory program model with hash-consed type shapes.
///
/// Two structurally equal shapes always intern to the same [`PsiTypeId`],
/// so id equality is native type equality.
///
/// Ids are `u32` indices. Class and method batches that would exceed that
/// range are rejected; type shapes are assumed to stay below `u32::MAX`.
#[derive(Debug, Default)]
pub struct PsiArena {
    types: IndexSet<PsiType>,
    classes: Vec<PsiClass>,
    methods: Vec<PsiMethod>,
    class_index: HashMap<String, PsiClassId>,
    class_types: HashMap<PsiClassId, PsiTypeId>,
    packages: IndexMap<String, PsiPackage>,
}

impl PsiArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_decls(program: ProgramDecl) -> Result<Self> {
        let mut arena = Self::new();
        for package in program.packages {
            arena.add_package(package);
        }
        arena.add_classes(program.classes)?;
        Ok(arena)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let program: ProgramDecl = serde_json::from_str(json)?;
        Self::from_decls(program)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn intern(&mut self, shape: PsiType) -> PsiTypeId {
        let (index, inserted) = self.types.insert_full(shape);
        if inserted {
            tracing::trace!("interned type shape #{}", index);
        }
        PsiTypeId(index as u32)
    }

    pub fn primitive(&mut self, primitive: PsiPrimitiveType) -> PsiTypeId {
        self.intern(PsiType::Primitive(primitive))
    }

    pub fn null(&mut self) -> PsiTypeId {
        self.intern(PsiType::Null)
    }

    pub fn array_of(&mut self, component: PsiTypeId) -> PsiTypeId {
        self.intern(PsiType::Array { component })
    }

    pub fn wildcard(&mut self, bound: Option<PsiTypeId>, extends: bool) -> PsiTypeId {
        self.intern(PsiType::Wildcard { bound, extends })
    }

    pub fn intersection(&mut self, conjuncts: Vec<PsiTypeId>) -> PsiTypeId {
        self.intern(PsiType::Intersection { conjuncts })
    }

    pub fn disjunction(&mut self, variants: Vec<PsiTypeId>) -> PsiTypeId {
        self.intern(PsiType::Disjunction { variants })
    }

    /// Reference a class by name. Unknown names intern as unresolved.
    pub fn class_ref(&mut self, name: &str, parameters: Vec<PsiTypeId>) -> PsiTypeId {
        let resolved = self.class_index.get(name).copied();
        self.intern(PsiType::Class {
            name: name.to_string(),
            resolved,
            parameters,
        })
    }

    /// Type of the named type parameter of `owner`, if declared there.
    pub fn type_parameter(&self, owner: PsiClassId, name: &str) -> Option<PsiTypeId> {
        self.class(owner)?
            .type_parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.ty)
    }

    /// Intern a textual type reference, resolving type variables in the
    /// scope of `scope` and its enclosing classes.
    pub fn intern_spec(&mut self, spec: &TypeSpec, scope: Option<PsiClassId>) -> PsiTypeId {
        match spec {
            TypeSpec::Primitive(p) => self.primitive(*p),
            TypeSpec::Null => self.null(),
            TypeSpec::Class { name, args } => {
                let parameters = args.iter().map(|a| self.intern_spec(a, scope)).collect();
                if !self.class_index.contains_key(name.as_str()) {
                    tracing::warn!("type reference to unknown class {}", name);
                }
                self.class_ref(name, parameters)
            }
            TypeSpec::Array(component) => {
                let component = self.intern_spec(component, scope);
                self.array_of(component)
            }
            TypeSpec::Wildcard { bound, extends } => {
                let bound = bound.as_ref().map(|b| self.intern_spec(b, scope));
                self.wildcard(bound, *extends)
            }
            TypeSpec::Intersection(conjuncts) => {
                let conjuncts = conjuncts.iter().map(|c| self.intern_spec(c, scope)).collect();
                self.intersection(conjuncts)
            }
            TypeSpec::Disjunction(variants) => {
                let variants = variants.iter().map(|v| self.intern_spec(v, scope)).collect();
                self.disjunction(variants)
            }
            TypeSpec::TypeVar(name) => match self.lookup_type_var(name, scope) {
                Some(ty) => ty,
                None => {
                    tracing::warn!("type variable {} is not declared in scope", name);
                    self.intern(PsiType::TypeParameter {
                        name: name.clone(),
                        owner: None,
                        index: 0,
                    })
                }
            },
        }
    }

    fn lookup_type_var(&self, name: &str, scope: Option<PsiClassId>) -> Option<PsiTypeId> {
        let mut current = scope;
        while let Some(id) = current {
            if let Some(ty) = self.type_parameter(id, name) {
                return Some(ty);
            }
            current = self.class(id).and_then(|c| c.containing_class);
        }
        None
    }

    pub fn add_package(&mut self, decl: PackageDecl) {
        let package = PsiPackage {
            qualified_name: decl.name.clone(),
            annotations: decl.annotations.into_iter().map(Into::into).collect(),
        };
        self.packages.insert(decl.name, package);
    }

    pub fn add_class(&mut self, decl: ClassDecl) -> Result<PsiClassId> {
        let ids = self.add_classes(vec![decl])?;
        Ok(ids[0])
    }

    /// Add a batch of classes. Names are declared first so that members and
    /// supertypes may refer to any class of the batch.
    ///
    /// The batch is validated as a whole; on error the arena is unchanged.
    pub fn add_classes(&mut self, decls: Vec<ClassDecl>) -> Result<Vec<PsiClassId>> {
        self.validate_batch(&decls)?;

        let ids: Vec<PsiClassId> = decls.iter().map(|decl| self.declare_class(decl)).collect();

        for (decl, &id) in decls.iter().zip(&ids) {
            if let Some(outer) = decl.enclosing.as_deref().and_then(|o| self.class_index.get(o)) {
                let outer_id = *outer;
                self.classes[id.0 as usize].containing_class = Some(outer_id);
                self.classes[outer_id.0 as usize].inner_classes.push(id);
            }
        }

        // Nested classes live in the package of their top-level class.
        for &id in &ids {
            let mut top = id;
            while let Some(outer) = self.classes[top.0 as usize].containing_class {
                top = outer;
            }
            if top != id {
                let package = self.classes[top.0 as usize].package.clone();
                self.classes[id.0 as usize].package = package;
            }
        }

        for (decl, &id) in decls.iter().zip(&ids) {
            self.intern_class_type(id);
            self.fill_class(decl, id);
        }

        Ok(ids)
    }

    /// Reject duplicate names, unknown or cyclic enclosing classes, and
    /// batches that would overflow the id space.
    fn validate_batch(&self, decls: &[ClassDecl]) -> Result<()> {
        ensure_capacity(self.classes.len(), decls.len(), "classes")?;
        let methods = decls.iter().map(|d| d.methods.len()).sum();
        ensure_capacity(self.methods.len(), methods, "methods")?;

        let mut batch: HashMap<&str, Option<&str>> = HashMap::with_capacity(decls.len());
        for decl in decls {
            if self.class_index.contains_key(decl.fqn.as_str())
                || batch.insert(decl.fqn.as_str(), decl.enclosing.as_deref()).is_some()
            {
                return Err(ModelError::DuplicateClass(decl.fqn.clone()));
            }
        }

        for decl in decls {
            let mut visited = HashSet::from([decl.fqn.as_str()]);
            let mut current = decl.enclosing.as_deref();
            while let Some(outer) = current {
                if self.class_index.contains_key(outer) {
                    break;
                }
                let Some(next) = batch.get(outer) else {
                    return Err(ModelError::UnknownEnclosingClass {
                        class: decl.fqn.clone(),
                        enclosing: outer.to_string(),
                    });
                };
                if !visited.insert(outer) {
                    return Err(ModelError::CyclicEnclosingClass(decl.fqn.clone()));
                }
                current = *next;
            }
        }
        Ok(())
    }

    fn declare_class(&mut self, decl: &ClassDecl) -> PsiClassId {
        // In range: checked by `validate_batch`.
        let id = PsiClassId(self.classes.len() as u32);
        let (package, name) = match decl.fqn.rfind('.') {
            Some(pos) => (decl.fqn[..pos].to_string(), decl.fqn[pos + 1..].to_string()),
            None => (String::new(), decl.fqn.clone()),
        };

        let type_parameters = decl
            .type_parameters
            .iter()
            .enumerate()
            .map(|(index, param)| PsiTypeParameter {
                name: param.name.clone(),
                bounds: Vec::new(),
                ty: self.intern(PsiType::TypeParameter {
                    name: param.name.clone(),
                    owner: Some(id),
                    index,
                }),
            })
            .collect();

        self.classes.push(PsiClass {
            qualified_name: decl.fqn.clone(),
            name,
            package: package.clone(),
            kind: decl.kind,
            containing_class: None,
            type_parameters,
            super_class: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            inner_classes: Vec::new(),
            annotations: decl.annotations.iter().cloned().map(Into::into).collect(),
            modifiers: decl.modifiers.clone(),
        });
        self.class_index.insert(decl.fqn.clone(), id);

        if decl.enclosing.is_none() && !package.is_empty() {
            self.packages
                .entry(package.clone())
                .or_insert_with(|| PsiPackage {
                    qualified_name: package,
                    annotations: Vec::new(),
                });
        }

        id
    }

    fn intern_class_type(&mut self, id: PsiClassId) {
        let class = &self.classes[id.0 as usize];
        let name = class.qualified_name.clone();
        let parameters = class.type_parameters.iter().map(|p| p.ty).collect();
        let ty = self.intern(PsiType::Class {
            name,
            resolved: Some(id),
            parameters,
        });
        self.class_types.insert(id, ty);
    }

    fn fill_class(&mut self, decl: &ClassDecl, id: PsiClassId) {
        let scope = Some(id);

        for (index, param) in decl.type_parameters.iter().enumerate() {
            let bounds = param
                .bounds
                .iter()
                .map(|b| self.intern_spec(b, scope))
                .collect();
            self.classes[id.0 as usize].type_parameters[index].bounds = bounds;
        }

        let super_class = decl.super_class.as_ref().map(|s| self.intern_spec(s, scope));
        let interfaces = decl
            .interfaces
            .iter()
            .map(|i| self.intern_spec(i, scope))
            .collect();

        let methods = decl
            .methods
            .iter()
            .map(|m| self.add_method(m, id))
            .collect();

        let class = &mut self.classes[id.0 as usize];
        class.super_class = super_class;
        class.interfaces = interfaces;
        class.methods = methods;
    }

    fn add_method(&mut self, decl: &MethodDecl, owner: PsiClassId) -> PsiMethodId {
        let scope = Some(owner);
        let return_type = if decl.constructor {
            None
        } else {
            Some(match &decl.return_type {
                Some(spec) => self.intern_spec(spec, scope),
                None => self.primitive(PsiPrimitiveType::Void),
            })
        };
        let parameters = decl
            .parameters
            .iter()
            .map(|p| PsiParameter {
                name: p.name.clone(),
                ty: self.intern_spec(&p.ty, scope),
            })
            .collect();
        let throws = decl
            .throws
            .iter()
            .map(|t| self.intern_spec(t, scope))
            .collect();

        // In range: checked by `validate_batch`.
        let id = PsiMethodId(self.methods.len() as u32);
        self.methods.push(PsiMethod {
            name: decl.name.clone(),
            containing_class: owner,
            is_constructor: decl.constructor,
            return_type,
            parameters,
            throws,
            annotations: decl.annotations.iter().cloned().map(Into::into).collect(),
            modifiers: decl.modifiers.clone(),
            default_value: decl.default_value.clone(),
        });
        id
    }

    /// Find a declared method of `class` by name and parameter count.
    pub fn find_method(&self, class: PsiClassId, name: &str, arity: usize) -> Option<PsiMethodId> {
        self.class(class)?.methods.iter().copied().find(|&m| {
            self.method(m)
                .is_some_and(|m| m.name == name && m.parameters.len() == arity)
        })
    }
}

fn ensure_capacity(current: usize, added: usize, what: &'static str) -> Result<()> {
    let total = current
        .checked_add(added)
        .ok_or(ModelError::CapacityExceeded(what))?;
    if total > u32::MAX as usize {
        return Err(ModelError::CapacityExceeded(what));
    }
    Ok(())
}

impl ProgramModel for PsiArena {
    fn type_shape(&self, ty: PsiTypeId) -> Option<&PsiType> {
        self.types.get_index(ty.0 as usize)
    }

    fn class(&self, id: PsiClassId) -> Option<&PsiClass> {
        self.classes.get(id.0 as usize)
    }

    fn method(&self, id: PsiMethodId) -> Option<&PsiMethod> {
        self.methods.get(id.0 as usize)
    }

    fn find_class(&self, fqn: &str) -> Option<PsiClassId> {
        self.class_index.get(fqn).copied()
    }

    fn find_package(&self, name: &str) -> Option<&PsiPackage> {
        self.packages.get(name)
    }

    fn class_type(&self, id: PsiClassId) -> Option<PsiTypeId> {
        self.class_types.get(&id).copied()
    }
}
