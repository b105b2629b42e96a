//! Type resolution within a namespace.

use std::collections::{HashSet, VecDeque};

use crate::{Api, DataType, Field, ModelError, Namespace, Result, StructDef, TypeDef};

/// A view of the model from inside one namespace.
///
/// Unqualified type references resolve against the scope's namespace.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    api: &'a Api,
    namespace: &'a Namespace,
}

/// A type declaration together with the scope it was declared in.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub def: &'a TypeDef,
    pub scope: Scope<'a>,
}

/// The result of stripping alias and nullable layers from a type.
#[derive(Debug, Clone, Copy)]
pub struct Unwrapped<'a> {
    /// The innermost type, never an alias or nullable wrapper.
    pub data_type: &'a DataType,
    /// Scope that `data_type` must be resolved in.
    pub scope: Scope<'a>,
    /// A nullable layer was stripped.
    pub nullable: bool,
    /// An alias layer was stripped.
    pub aliased: bool,
}

/// A field together with the scope of the type that declares it.
#[derive(Debug, Clone, Copy)]
pub struct ScopedField<'a> {
    pub field: &'a Field,
    pub scope: Scope<'a>,
}

impl<'a> Scope<'a> {
    pub fn new(api: &'a Api, namespace: &'a Namespace) -> Self {
        Self { api, namespace }
    }

    /// Create a scope for the namespace with the given name.
    pub fn named(api: &'a Api, namespace: &str) -> Result<Self> {
        api.namespace(namespace)
            .map(|ns| Self::new(api, ns))
            .ok_or_else(|| ModelError::UnknownNamespace {
                namespace: namespace.to_string(),
            })
    }

    pub fn api(&self) -> &'a Api {
        self.api
    }

    pub fn namespace(&self) -> &'a Namespace {
        self.namespace
    }

    /// Resolve a type name, optionally qualified with a namespace.
    pub fn resolve(&self, name: &str, namespace: Option<&str>) -> Result<Resolved<'a>> {
        let scope = match namespace {
            Some(ns) if ns != self.namespace.name => Self::named(self.api, ns)?,
            _ => *self,
        };

        scope
            .namespace
            .find_type(name)
            .map(|def| Resolved { def, scope })
            .ok_or_else(|| ModelError::UnknownType {
                namespace: scope.namespace.name.clone(),
                name: name.to_string(),
            })
    }

    /// Resolve a type reference. Returns `None` for anything but a reference.
    pub fn resolve_type(&self, data_type: &DataType) -> Result<Option<Resolved<'a>>> {
        match data_type {
            DataType::Ref { name, namespace } => {
                self.resolve(name, namespace.as_deref()).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Strip alias and nullable layers, reporting what was stripped.
    pub fn unwrap(&self, data_type: &'a DataType) -> Result<Unwrapped<'a>> {
        let mut current = data_type;
        let mut scope = *self;
        let mut nullable = false;
        let mut aliased = false;
        let mut seen: HashSet<(&'a str, &'a str)> = HashSet::new();

        loop {
            match current {
                DataType::Nullable { inner } => {
                    nullable = true;
                    current = inner.as_ref();
                }
                DataType::Ref { name, namespace } => {
                    let resolved = scope.resolve(name, namespace.as_deref())?;
                    let TypeDef::Alias(alias) = resolved.def else {
                        break;
                    };
                    let key = (resolved.scope.namespace.name.as_str(), alias.name.as_str());
                    if !seen.insert(key) {
                        return Err(ModelError::AliasCycle {
                            namespace: key.0.to_string(),
                            name: key.1.to_string(),
                        });
                    }
                    aliased = true;
                    current = &alias.target;
                    scope = resolved.scope;
                }
                _ => break,
            }
        }

        Ok(Unwrapped {
            data_type: current,
            scope,
            nullable,
            aliased,
        })
    }

    /// Whether the type is a reference to a struct or union.
    ///
    /// Aliases of user-defined types do not count.
    pub fn is_user_defined(&self, data_type: &DataType) -> Result<bool> {
        Ok(self
            .resolve_type(data_type)?
            .is_some_and(|resolved| resolved.def.is_user_defined()))
    }

    /// All fields of a struct (ancestors first) or the variants of a union.
    ///
    /// Any other type has no fields.
    pub fn all_fields(&self, data_type: &DataType) -> Result<Vec<ScopedField<'a>>> {
        let Some(resolved) = self.resolve_type(data_type)? else {
            return Ok(Vec::new());
        };

        match resolved.def {
            TypeDef::Struct(def) => {
                let mut fields = Vec::new();
                let mut seen = HashSet::new();
                resolved.scope.collect_struct_fields(def, &mut fields, &mut seen)?;
                Ok(fields)
            }
            TypeDef::Union(def) => Ok(def
                .variants
                .iter()
                .map(|field| ScopedField {
                    field,
                    scope: resolved.scope,
                })
                .collect()),
            TypeDef::Alias(_) => Ok(Vec::new()),
        }
    }

    fn collect_struct_fields(
        &self,
        def: &'a StructDef,
        fields: &mut Vec<ScopedField<'a>>,
        seen: &mut HashSet<(&'a str, &'a str)>,
    ) -> Result<()> {
        if !seen.insert((self.namespace.name.as_str(), def.name.as_str())) {
            return Err(ModelError::InheritanceCycle {
                namespace: self.namespace.name.clone(),
                name: def.name.clone(),
            });
        }

        if let Some(parent) = &def.extends {
            let (parent_def, parent_scope) = self.expect_struct(parent, "parent", &def.name)?;
            parent_scope.collect_struct_fields(parent_def, fields, seen)?;
        }

        fields.extend(def.fields.iter().map(|field| ScopedField {
            field,
            scope: *self,
        }));
        Ok(())
    }

    /// Every enumerated subtype of a struct, breadth-first across all levels.
    pub fn all_subtypes(&self, def: &'a StructDef) -> Result<Vec<(&'a StructDef, Scope<'a>)>> {
        let mut result = Vec::new();
        let mut seen: HashSet<(&'a str, &'a str)> = HashSet::new();
        let mut queue: VecDeque<(&'a StructDef, Scope<'a>)> = VecDeque::new();

        for subtype in &def.subtypes {
            queue.push_back(self.expect_struct(&subtype.data_type, "subtype", &def.name)?);
        }

        while let Some((sub_def, sub_scope)) = queue.pop_front() {
            if !seen.insert((sub_scope.namespace.name.as_str(), sub_def.name.as_str())) {
                return Err(ModelError::InheritanceCycle {
                    namespace: sub_scope.namespace.name.clone(),
                    name: sub_def.name.clone(),
                });
            }
            for subtype in &sub_def.subtypes {
                queue.push_back(sub_scope.expect_struct(
                    &subtype.data_type,
                    "subtype",
                    &sub_def.name,
                )?);
            }
            result.push((sub_def, sub_scope));
        }

        Ok(result)
    }

    fn expect_struct(
        &self,
        data_type: &DataType,
        role: &'static str,
        owner: &str,
    ) -> Result<(&'a StructDef, Scope<'a>)> {
        let resolved = self.resolve_type(data_type)?;
        match resolved {
            Some(Resolved {
                def: TypeDef::Struct(def),
                scope,
            }) => Ok((def, scope)),
            Some(Resolved { def, scope }) => Err(ModelError::NotAStruct {
                namespace: scope.namespace.name.clone(),
                name: def.name().to_string(),
                role,
                owner: owner.to_string(),
            }),
            None => Err(ModelError::NotAStruct {
                namespace: self.namespace.name.clone(),
                name: format!("{data_type:?}"),
                role,
                owner: owner.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AliasDef, Primitive, UnionDef};

    fn api() -> Api {
        Api::new([
            Namespace::new("common")
                .with_type(AliasDef::new("Path", DataType::string()))
                .with_type(
                    StructDef::new("Base")
                        .field(Field::new("id", DataType::primitive(Primitive::UInt64))),
                ),
            Namespace::new("files")
                .with_type(AliasDef::new("MaybePath", DataType::nullable(DataType::qualified("common", "Path"))))
                .with_type(
                    StructDef::new("ListArg")
                        .extends(DataType::qualified("common", "Base"))
                        .field(Field::new("path", DataType::qualified("common", "Path")))
                        .field(Field::new("cursor", DataType::reference("MaybePath"))),
                )
                .with_type(
                    UnionDef::new("Mode")
                        .variant(Field::new("add", DataType::void()))
                        .variant(Field::new("update", DataType::string())),
                )
                .with_type(AliasDef::new("Loop", DataType::reference("Loop")))
                .with_type(
                    StructDef::new("Metadata")
                        .subtype("file", DataType::reference("FileMetadata"))
                        .subtype("folder", DataType::reference("FolderMetadata")),
                )
                .with_type(
                    StructDef::new("FileMetadata")
                        .extends(DataType::reference("Metadata"))
                        .subtype("photo", DataType::reference("PhotoMetadata")),
                )
                .with_type(StructDef::new("FolderMetadata").extends(DataType::reference("Metadata")))
                .with_type(StructDef::new("PhotoMetadata").extends(DataType::reference("FileMetadata"))),
        ])
    }

    fn files(api: &Api) -> Scope<'_> {
        Scope::named(api, "files").unwrap()
    }

    #[test]
    fn test_unwrap_plain_type() {
        let api = api();
        let ty = DataType::string();
        let unwrapped = files(&api).unwrap(&ty).unwrap();
        assert_eq!(unwrapped.data_type, &DataType::string());
        assert!(!unwrapped.nullable);
        assert!(!unwrapped.aliased);
    }

    #[test]
    fn test_unwrap_nullable() {
        let api = api();
        let ty = DataType::nullable(DataType::reference("ListArg"));
        let unwrapped = files(&api).unwrap(&ty).unwrap();
        assert_eq!(unwrapped.data_type, &DataType::reference("ListArg"));
        assert!(unwrapped.nullable);
        assert!(!unwrapped.aliased);
    }

    #[test]
    fn test_unwrap_through_aliases_across_namespaces() {
        let api = api();
        let ty = DataType::reference("MaybePath");
        let unwrapped = files(&api).unwrap(&ty).unwrap();
        assert_eq!(unwrapped.data_type, &DataType::string());
        assert!(unwrapped.nullable);
        assert!(unwrapped.aliased);
        assert_eq!(unwrapped.scope.namespace().name, "common");
    }

    #[test]
    fn test_unwrap_alias_cycle() {
        let api = api();
        let ty = DataType::reference("Loop");
        let err = files(&api).unwrap(&ty).unwrap_err();
        assert_eq!(
            err,
            ModelError::AliasCycle {
                namespace: "files".into(),
                name: "Loop".into()
            }
        );
    }

    #[test]
    fn test_unknown_type() {
        let api = api();
        let err = files(&api)
            .unwrap(&DataType::reference("Nope"))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownType {
                namespace: "files".into(),
                name: "Nope".into()
            }
        );
    }

    #[test]
    fn test_unknown_namespace() {
        let api = api();
        let err = files(&api)
            .resolve("Path", Some("nowhere"))
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownNamespace { .. }));
    }

    #[test]
    fn test_is_user_defined() {
        let api = api();
        let scope = files(&api);
        assert!(scope.is_user_defined(&DataType::reference("ListArg")).unwrap());
        assert!(scope.is_user_defined(&DataType::reference("Mode")).unwrap());
        assert!(!scope.is_user_defined(&DataType::reference("MaybePath")).unwrap());
        assert!(!scope.is_user_defined(&DataType::string()).unwrap());
    }

    #[test]
    fn test_all_fields_include_parent_first() {
        let api = api();
        let fields = files(&api)
            .all_fields(&DataType::reference("ListArg"))
            .unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.field.name.as_str()).collect();
        assert_eq!(names, ["id", "path", "cursor"]);
        assert_eq!(fields[0].scope.namespace().name, "common");
        assert_eq!(fields[1].scope.namespace().name, "files");
    }

    #[test]
    fn test_all_fields_of_union_are_variants() {
        let api = api();
        let fields = files(&api).all_fields(&DataType::reference("Mode")).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.field.name.as_str()).collect();
        assert_eq!(names, ["add", "update"]);
    }

    #[test]
    fn test_all_fields_of_non_user_defined_is_empty() {
        let api = api();
        assert!(files(&api).all_fields(&DataType::string()).unwrap().is_empty());
    }

    #[test]
    fn test_inheritance_cycle() {
        let api = Api::new([Namespace::new("ns")
            .with_type(StructDef::new("A").extends(DataType::reference("B")))
            .with_type(StructDef::new("B").extends(DataType::reference("A")))]);
        let scope = Scope::named(&api, "ns").unwrap();
        let err = scope.all_fields(&DataType::reference("A")).unwrap_err();
        assert!(matches!(err, ModelError::InheritanceCycle { .. }));
    }

    #[test]
    fn test_parent_must_be_struct() {
        let api = Api::new([Namespace::new("ns")
            .with_type(UnionDef::new("U"))
            .with_type(StructDef::new("A").extends(DataType::reference("U")))]);
        let scope = Scope::named(&api, "ns").unwrap();
        let err = scope.all_fields(&DataType::reference("A")).unwrap_err();
        assert_eq!(
            err,
            ModelError::NotAStruct {
                namespace: "ns".into(),
                name: "U".into(),
                role: "parent",
                owner: "A".into(),
            }
        );
    }

    #[test]
    fn test_all_subtypes_breadth_first() {
        let api = api();
        let scope = files(&api);
        let Some(Resolved {
            def: TypeDef::Struct(metadata),
            ..
        }) = scope.resolve_type(&DataType::reference("Metadata")).unwrap()
        else {
            panic!("Metadata should be a struct");
        };

        let names: Vec<&str> = scope
            .all_subtypes(metadata)
            .unwrap()
            .iter()
            .map(|(def, _)| def.name.as_str())
            .collect();
        assert_eq!(names, ["FileMetadata", "FolderMetadata", "PhotoMetadata"]);
    }
}
