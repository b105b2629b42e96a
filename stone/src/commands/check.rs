use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stone_api::ApiFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the serialized API model (.json or .toml)
    #[arg(long, default_value = "api.json")]
    pub api: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let api_file = ApiFile::open(&self.api).unwrap_or_exit();
        let report = ops::check(api_file.api(), api_file.path());

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
