//! The generated client file.

use std::path::{Path, PathBuf};

use eyre::Result;
use stone_core::GeneratedFile;

/// The single JavaScript file holding every route stub.
///
/// Content is rendered up front so that writing it cannot fail halfway
/// through the model.
#[derive(Debug, Clone)]
pub struct RoutesJs {
    filename: String,
    content: String,
}

impl RoutesJs {
    pub fn new(filename: impl Into<String>, content: String) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for RoutesJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.filename)
    }

    fn render(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}
