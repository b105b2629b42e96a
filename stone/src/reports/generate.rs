//! Generation report data structures.

use std::path::PathBuf;

use stone_codegen_js::PreviewFile;

use super::output::{Output, Report};

/// Report data from a client generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path to the API model.
    pub api_path: PathBuf,
    /// Number of stubs generated.
    pub route_count: usize,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            // Only the generated content, so it can be redirected.
            GenerationResult::Preview(files) => {
                for file in files {
                    out.content(&file.content);
                }
            }
            GenerationResult::Written(paths) => {
                out.preformatted(&format!(
                    "Generated {} route{} from {}",
                    self.route_count,
                    if self.route_count == 1 { "" } else { "s" },
                    self.api_path.display()
                ));
                for path in paths {
                    out.added_item(&path.display().to_string());
                }
            }
        }
    }
}
