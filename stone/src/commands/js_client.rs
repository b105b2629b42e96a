use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use stone_api::ApiFile;
use stone_codegen_js::{Generator, JsClientConfig, LanguageCodegen};

use super::UnwrapOrExit;
use crate::reports::{GenerateReport, GenerationResult, Report, TerminalOutput};

#[derive(Args)]
pub struct JsClientCommand {
    /// Destination file, relative to the output directory
    pub filename: String,

    /// Path to the serialized API model (.json or .toml)
    #[arg(long, default_value = "api.json")]
    pub api: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Route attribute passed to `this.request` after the argument (repeatable)
    #[arg(short = 'a', long = "route-attribute", value_name = "NAME")]
    pub route_attributes: Vec<String>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl JsClientCommand {
    /// Run the js-client command
    pub fn run(&self) -> Result<()> {
        let api_file = ApiFile::open(&self.api).unwrap_or_exit();
        let generator = Generator::new(api_file.api(), self.config());

        let result = if self.dry_run {
            GenerationResult::Preview(generator.preview()?)
        } else {
            let result = generator
                .generate(&self.output_dir)
                .wrap_err("Failed to generate JavaScript client")?;
            GenerationResult::Written(result.written)
        };

        GenerateReport {
            api_path: api_file.path().to_path_buf(),
            route_count: api_file.api().route_count(),
            result,
        }
        .render(&mut TerminalOutput::new());

        Ok(())
    }

    fn config(&self) -> JsClientConfig {
        self.route_attributes
            .iter()
            .fold(JsClientConfig::new(&self.filename), |config, attr| {
                config.route_attribute(attr)
            })
    }
}
