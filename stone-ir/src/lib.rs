//! API model types for the Stone code generators.
//!
//! This crate defines the typed API description that back ends consume:
//! namespaces, routes, user-defined types and the type references between
//! them. Parsing the source IDL and validating it happen upstream.
//!
//! # Architecture
//!
//! ```text
//! IDL → front end (parse, validate) → stone-ir (Api) → back end (codegen)
//! ```
//!
//! [`Scope`] resolves named references and implements the unwrap operation
//! that strips alias and nullable layers.

mod api;
mod error;
mod scope;
mod types;

pub use api::{
    AliasDef, Api, AttrValue, Field, Namespace, Route, StructDef, Subtype, TypeDef, UnionDef,
};
pub use error::{ModelError, Result};
pub use scope::{Resolved, Scope, ScopedField, Unwrapped};
pub use types::{DataType, Primitive};
