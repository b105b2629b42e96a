//! JSDoc type mapper implementation.

use eyre::Result;
use stone_codegen::TypeMapper;
use stone_ir::{DataType, ModelError, Primitive, Scope, StructDef, TypeDef};

/// Maps model types to JSDoc type annotations.
pub struct JsTypeMapper;

impl TypeMapper for JsTypeMapper {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Boolean => "boolean",
            Primitive::Bytes => "string",
            Primitive::Float32
            | Primitive::Float64
            | Primitive::Int32
            | Primitive::Int64
            | Primitive::UInt32
            | Primitive::UInt64 => "number",
            Primitive::String => "string",
            Primitive::Timestamp => "Timestamp",
            Primitive::Void => "void",
        }
    }

    fn map_type(&self, scope: Scope<'_>, data_type: &DataType) -> Result<String> {
        self.render(scope, data_type, &mut Vec::new())
    }
}

impl JsTypeMapper {
    /// A struct with enumerated subtypes stands for any of them, and for
    /// itself when it is a catch-all.
    fn map_subtype_union(&self, scope: Scope<'_>, def: &StructDef) -> Result<String> {
        let subtypes = scope.all_subtypes(def)?;
        let mut members: Vec<&str> = subtypes.iter().map(|(sub, _)| sub.name.as_str()).collect();
        if def.catch_all {
            members.push(&def.name);
        }

        Ok(match members.as_slice() {
            [single] => single.to_string(),
            _ => format!("({})", members.join("|")),
        })
    }

    /// `aliases` holds the aliases being expanded on the current path.
    fn render(
        &self,
        scope: Scope<'_>,
        data_type: &DataType,
        aliases: &mut Vec<(String, String)>,
    ) -> Result<String> {
        match data_type {
            DataType::Primitive { name } => Ok(self.map_primitive(*name).to_string()),
            DataType::List { item } => {
                Ok(format!("Array.<{}>", self.render(scope, item, aliases)?))
            }
            DataType::Map { key, value } => {
                // not rendered, but must resolve
                self.render(scope, key, aliases)?;
                self.render(scope, value, aliases)?;
                Ok("Object".to_string())
            }
            DataType::Nullable { inner } => self.render(scope, inner, aliases),
            DataType::Ref { name, namespace } => {
                let resolved = scope.resolve(name, namespace.as_deref())?;
                match resolved.def {
                    TypeDef::Struct(def) if def.has_enumerated_subtypes() => {
                        self.map_subtype_union(resolved.scope, def)
                    }
                    TypeDef::Alias(alias) => {
                        // named as-is, but the target must still resolve
                        let key = (resolved.scope.namespace().name.clone(), alias.name.clone());
                        if aliases.contains(&key) {
                            return Err(ModelError::AliasCycle {
                                namespace: key.0,
                                name: key.1,
                            }
                            .into());
                        }
                        aliases.push(key);
                        self.render(resolved.scope, &alias.target, aliases)?;
                        aliases.pop();
                        Ok(alias.name.clone())
                    }
                    def => Ok(def.name().to_string()),
                }
            }
        }
    }
}
