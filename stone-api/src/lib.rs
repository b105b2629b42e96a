//! Loading serialized API models.
//!
//! The front end hands models to the generators as JSON or TOML files
//! describing a [`stone_ir::Api`]. Parse failures are reported as miette
//! diagnostics pointing into the source file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;

pub use error::{Error, Result, SourceContext};
pub use file::{ApiFile, Format, parse_str};
