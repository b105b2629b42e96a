//! Data type references.

use serde::{Deserialize, Serialize};

/// Built-in primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Boolean,
    Bytes,
    Float32,
    Float64,
    Int32,
    Int64,
    UInt32,
    UInt64,
    String,
    Timestamp,
    Void,
}

impl Primitive {
    /// Get the name as written in the API description.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Boolean => "Boolean",
            Primitive::Bytes => "Bytes",
            Primitive::Float32 => "Float32",
            Primitive::Float64 => "Float64",
            Primitive::Int32 => "Int32",
            Primitive::Int64 => "Int64",
            Primitive::UInt32 => "UInt32",
            Primitive::UInt64 => "UInt64",
            Primitive::String => "String",
            Primitive::Timestamp => "Timestamp",
            Primitive::Void => "Void",
        }
    }
}

/// A reference to a data type.
///
/// User-defined types and aliases are referenced by name. A reference without
/// a namespace resolves in the namespace it appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataType {
    /// A built-in type.
    Primitive { name: Primitive },
    /// A homogeneous list.
    List { item: Box<DataType> },
    /// A string-keyed map.
    Map {
        key: Box<DataType>,
        value: Box<DataType>,
    },
    /// A value that may be absent.
    Nullable { inner: Box<DataType> },
    /// A struct, union or alias declared in some namespace.
    Ref {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
    },
}

impl DataType {
    pub fn primitive(name: Primitive) -> Self {
        Self::Primitive { name }
    }

    pub fn string() -> Self {
        Self::primitive(Primitive::String)
    }

    pub fn void() -> Self {
        Self::primitive(Primitive::Void)
    }

    pub fn list(item: DataType) -> Self {
        Self::List {
            item: Box::new(item),
        }
    }

    pub fn map(key: DataType, value: DataType) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn nullable(inner: DataType) -> Self {
        Self::Nullable {
            inner: Box::new(inner),
        }
    }

    /// Reference a type in the enclosing namespace.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref {
            name: name.into(),
            namespace: None,
        }
    }

    /// Reference a type in another namespace.
    pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Ref {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }
}

impl Default for DataType {
    fn default() -> Self {
        Self::void()
    }
}
