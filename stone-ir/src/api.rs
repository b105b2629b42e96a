//! API model.
//!
//! The model is produced by the front end (parsing and semantic validation)
//! and consumed read-only by the generators.
//!
//! ```text
//! Api
//! └── Namespace ("files")
//!     ├── TypeDef (struct ListArg, union Mode, alias Path, ...)
//!     └── Route ("list": ListArg -> List(String))
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::DataType;

/// Root of the API model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Api {
    /// Namespaces in declaration order.
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
}

impl Api {
    pub fn new(namespaces: impl IntoIterator<Item = Namespace>) -> Self {
        Self {
            namespaces: namespaces.into_iter().collect(),
        }
    }

    /// Look up a namespace by name.
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    /// Iterate over every route with its namespace, in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = (&Namespace, &Route)> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.routes.iter().map(move |route| (ns, route)))
    }

    /// Total number of routes across all namespaces.
    pub fn route_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.routes.len()).sum()
    }
}

/// A named group of routes and the types they use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// User-defined types in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDef>,
    /// Routes in declaration order.
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_type(mut self, def: impl Into<TypeDef>) -> Self {
        self.types.push(def.into());
        self
    }

    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Find a type declared in this namespace.
    pub fn find_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|def| def.name() == name)
    }
}

/// A single RPC-like operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub arg: DataType,
    #[serde(default)]
    pub result: DataType,
    #[serde(default)]
    pub error: DataType,
    /// Generator-specific metadata, in declaration order.
    #[serde(default)]
    pub attrs: IndexMap<String, AttrValue>,
}

impl Route {
    pub fn new(name: impl Into<String>, arg: DataType, result: DataType) -> Self {
        Self {
            name: name.into(),
            arg,
            result,
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn error(mut self, error: DataType) -> Self {
        self.error = error;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Documentation text, if present and not blank.
    pub fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref().filter(|doc| !doc.trim().is_empty())
    }
}

/// A route attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<AttrValue>),
    Map(IndexMap<String, AttrValue>),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(value: Vec<AttrValue>) -> Self {
        Self::List(value)
    }
}

/// A user-defined type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDef {
    Struct(StructDef),
    Union(UnionDef),
    Alias(AliasDef),
}

impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Struct(def) => &def.name,
            TypeDef::Union(def) => &def.name,
            TypeDef::Alias(def) => &def.name,
        }
    }

    /// Structs and unions are user-defined; aliases are not.
    pub fn is_user_defined(&self) -> bool {
        !matches!(self, TypeDef::Alias(_))
    }
}

impl From<StructDef> for TypeDef {
    fn from(def: StructDef) -> Self {
        Self::Struct(def)
    }
}

impl From<UnionDef> for TypeDef {
    fn from(def: UnionDef) -> Self {
        Self::Union(def)
    }
}

impl From<AliasDef> for TypeDef {
    fn from(def: AliasDef) -> Self {
        Self::Alias(def)
    }
}

/// A struct with ordered fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Parent struct whose fields precede this struct's own fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<DataType>,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Enumerated subtypes, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<Subtype>,
    /// Whether the struct itself may appear where its subtypes are expected.
    #[serde(default)]
    pub catch_all: bool,
}

impl StructDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn extends(mut self, parent: DataType) -> Self {
        self.extends = Some(parent);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn subtype(mut self, tag: impl Into<String>, data_type: DataType) -> Self {
        self.subtypes.push(Subtype {
            tag: tag.into(),
            data_type,
        });
        self
    }

    pub fn catch_all(mut self) -> Self {
        self.catch_all = true;
        self
    }

    pub fn has_enumerated_subtypes(&self) -> bool {
        !self.subtypes.is_empty()
    }
}

/// An enumerated subtype of a struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtype {
    pub tag: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
}

/// A tagged union whose variants are fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnionDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub variants: Vec<Field>,
}

impl UnionDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: Field) -> Self {
        self.variants.push(variant);
        self
    }
}

/// A named alias for another type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub target: DataType,
}

impl AliasDef {
    pub fn new(name: impl Into<String>, target: DataType) -> Self {
        Self {
            name: name.into(),
            doc: None,
            target,
        }
    }
}

/// A struct field or union variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", default)]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}
