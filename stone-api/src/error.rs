use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for stone-api operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so parse errors can point
/// at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self.span_at(source.line(), source.column());
        Box::new(Error::ParseJson {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ParseToml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Convert a 1-based line and column into a one-character span.
    fn span_at(&self, line: usize, column: usize) -> Option<SourceSpan> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let offset = (line_start + column.saturating_sub(1)).min(self.src.len());
        let len = usize::from(offset < self.src.len());
        Some(SourceSpan::from((offset, len)))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the API model with --api <path>"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported API model format for '{path}'")]
    #[diagnostic(
        code(stone::unsupported_format),
        help("use a file ending in .json or .toml")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse API model")]
    #[diagnostic(code(stone::parse_error))]
    ParseJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse API model")]
    #[diagnostic(code(stone::parse_error))]
    ParseToml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}
