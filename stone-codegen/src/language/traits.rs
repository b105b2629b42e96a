//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use stone_ir::{DataType, Primitive, Scope};

/// Trait for language-specific code generators.
///
/// Implement this trait to add a back end for a new target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "javascript", "python")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "js", "py")
    fn file_extension(&self) -> &'static str;

    /// Render every generated file without writing to disk.
    ///
    /// Fails when the model is inconsistent.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory.
    ///
    /// Every file is rendered before the first one is written.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, in generation order
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping model types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a primitive type to a language-specific type string
    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// Map a data type, resolving references in `scope`
    fn map_type(&self, scope: Scope<'_>, data_type: &DataType) -> Result<String>;

    /// Mark a mapped type as accepting null
    fn map_nullable(&self, mapped: String) -> String {
        format!("{mapped}|null")
    }

    /// Map the type of a field.
    ///
    /// Alias and nullable layers are stripped first; the base type is
    /// mapped and marked nullable once if any nullable layer was found.
    fn map_field_type(&self, scope: Scope<'_>, data_type: &DataType) -> Result<String> {
        let unwrapped = scope.unwrap(data_type)?;
        let mapped = self.map_type(unwrapped.scope, unwrapped.data_type)?;
        Ok(if unwrapped.nullable {
            self.map_nullable(mapped)
        } else {
            mapped
        })
    }
}
