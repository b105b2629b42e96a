use std::path::{Path, PathBuf};

use stone_ir::Api;

use crate::{Error, Result, SourceContext};

/// Serialization format of an API model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// Parse an API model from a string.
pub fn parse_str(content: &str, format: Format, filename: &str) -> Result<Api> {
    let ctx = SourceContext::new(content, filename);
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e)),
        Format::Toml => toml::from_str(content).map_err(|e| ctx.toml_error(e)),
    }
}

/// An API model file with both raw content and the parsed model.
#[derive(Debug)]
pub struct ApiFile {
    path: PathBuf,
    format: Format,
    content: String,
    api: Api,
}

impl ApiFile {
    /// Open and parse an API model file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)
            .ok_or_else(|| Box::new(Error::UnsupportedFormat { path: path.clone() }))?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let api = parse_str(&content, format, &filename)?;

        tracing::debug!(
            path = %path.display(),
            format = format.as_str(),
            namespaces = api.namespaces.len(),
            routes = api.route_count(),
            "loaded API model"
        );

        Ok(Self {
            path,
            format,
            content,
            api,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed model.
    pub fn api(&self) -> &Api {
        &self.api
    }
}
