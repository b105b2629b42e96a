//! JavaScript AST builders for documentation blocks and route stubs.
//!
//! These provide a high-level API for constructing JavaScript syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod jsdoc;

pub use fns::{FnAssign, Return};
pub use jsdoc::JsDoc;
