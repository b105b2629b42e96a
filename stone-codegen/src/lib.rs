//! Shared code generation utilities for the Stone code generators.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific back ends (e.g., `stone-codegen-js`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, wrapping)
//! - [`doc`] - Documentation processing (reference tags, resolvers)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod doc;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable, wrap_text};
pub use doc::{DocTag, IdentityResolver, TagResolver, process_doc, render_doc};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
