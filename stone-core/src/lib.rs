//! Core utilities and types for the Stone code generators.
//!
//! This crate provides the naming helpers and file output primitives
//! shared by every back end.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, write_atomic};
// String utilities
pub use utils::{split_words, to_camel_case};
