//! JSDoc comment block builder.

use stone_codegen::{CodeFragment, Renderable};

const PREFIX: &str = " * ";

#[derive(Debug, Clone)]
enum DocLine {
    /// Emitted as is.
    Tag(String),
    /// Word-wrapped under the ` * ` prefix.
    Text(String),
}

/// A `/** ... */` block with one ` * ` prefixed line per entry.
///
/// ```ignore
/// let doc = JsDoc::new()
///     .text("Lists a folder.")
///     .tag("@function Routes#filesList")
///     .tag("@returns {Array.<string>}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsDoc {
    lines: Vec<DocLine>,
}

impl JsDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add free text, wrapped to the line width.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.lines.push(DocLine::Text(text.into()));
        self
    }

    /// Add a single line that is never wrapped.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.lines.push(DocLine::Tag(tag.into()));
        self
    }

    /// Add a tag line only when `condition` holds.
    pub fn tag_if(self, condition: bool, tag: impl Into<String>) -> Self {
        if condition { self.tag(tag) } else { self }
    }
}

impl Renderable for JsDoc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::line("/**")];
        fragments.extend(self.lines.iter().map(|line| match line {
            DocLine::Tag(tag) => CodeFragment::line(format!("{PREFIX}{tag}")),
            DocLine::Text(text) => CodeFragment::wrapped(PREFIX, text.as_str()),
        }));
        fragments.push(CodeFragment::line(" */"));
        fragments
    }
}
