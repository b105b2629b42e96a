//! CodeFile abstraction for structured JavaScript file generation.
//!
//! Provides a high-level API for generating JavaScript files with a fixed
//! preamble, a body of separately rendered items, and a trailer.

use stone_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a JavaScript file.
///
/// Organizes code into three sections: preamble, body, and trailer. Every
/// body item and the trailer are preceded by one blank line.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .preamble(RawCode::lines(["var routes = {};"]))
///     .add(route_stub)
///     .trailer(RawCode::lines(["module.exports = routes;"]))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    preamble: Vec<CodeFragment>,
    body: Vec<Vec<CodeFragment>>,
    trailer: Vec<CodeFragment>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the preamble.
    pub fn preamble<R: Renderable>(mut self, node: R) -> Self {
        self.preamble.extend(node.to_fragments());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Append to the trailer.
    pub fn trailer<R: Renderable>(mut self, node: R) -> Self {
        self.trailer.extend(node.to_fragments());
        self
    }

    /// Render the file with JavaScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::javascript();

        for fragment in &self.preamble {
            builder.apply_fragment(fragment.clone());
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.trailer.is_empty() {
            builder.push_blank();
            for fragment in &self.trailer {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// Verbatim lines of code.
pub struct RawCode {
    lines: Vec<String>,
}

impl RawCode {
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.lines
            .iter()
            .map(|line| CodeFragment::line(line.as_str()))
            .collect()
    }
}
