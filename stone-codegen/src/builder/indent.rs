//! Indentation configuration for code generation.

/// Indentation for generated code, in spaces per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    /// 2-space indentation (JavaScript).
    pub const JAVASCRIPT: Self = Self(2);

    /// Leading whitespace for `level` indent levels.
    pub fn prefix(&self, level: usize) -> String {
        " ".repeat(self.0 * level)
    }
}
