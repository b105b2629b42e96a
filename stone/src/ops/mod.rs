//! Core operations.
//!
//! Business logic for stone commands, separated from CLI argument parsing
//! and output rendering.

pub mod check;

pub use check::check;
