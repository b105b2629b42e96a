//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable, WRAP_WIDTH, wrap_text};

/// Builds code line by line at the current indentation.
///
/// # Example
///
/// ```
/// use stone_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::javascript();
/// builder
///     .push_line("/**")
///     .push_wrapped(" * ", "Lists the contents of a folder.")
///     .push_line(" */");
///
/// assert_eq!(builder.build(), "/**\n * Lists the contents of a folder.\n */\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&self.indent.prefix(self.indent_level));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add word-wrapped text, every line starting with the current
    /// indentation followed by `prefix`.
    ///
    /// Lines are at most [`WRAP_WIDTH`] columns wide, indentation included.
    pub fn push_wrapped(&mut self, prefix: &str, text: &str) -> &mut Self {
        let full_prefix = format!("{}{}", self.indent.prefix(self.indent_level), prefix);
        for line in wrap_text(text, &full_prefix, WRAP_WIDTH) {
            self.buffer.push_str(&line);
            self.buffer.push('\n');
        }
        self
    }

    /// Emit a Renderable node.
    ///
    /// This is the primary way to render AST nodes.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Wrapped { prefix, text } => {
                self.push_wrapped(&prefix, &text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
