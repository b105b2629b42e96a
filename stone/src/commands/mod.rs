mod check;
mod completions;
mod js_client;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use js_client::JsClientCommand;

/// Extension trait for exiting on model load errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for stone_api::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "stone")]
#[command(version)]
#[command(about = "Generate API clients from Stone API models")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::JsClient(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a JavaScript client with one stub per route
    JsClient(JsClientCommand),

    /// Validate an API model without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_js_client_arguments() {
        let cli = Cli::try_parse_from([
            "stone",
            "-vv",
            "js-client",
            "client/routes.js",
            "--api",
            "model.toml",
            "-o",
            "out",
            "-a",
            "host",
            "--route-attribute",
            "auth",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::JsClient(cmd) = cli.command else {
            panic!("expected js-client");
        };
        assert_eq!(cmd.filename, "client/routes.js");
        assert_eq!(cmd.api.to_str(), Some("model.toml"));
        assert_eq!(cmd.output_dir.to_str(), Some("out"));
        assert_eq!(cmd.route_attributes, ["host", "auth"]);
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["stone", "js-client", "routes.js"]).unwrap();

        assert_eq!(cli.verbose, 0);
        let Commands::JsClient(cmd) = cli.command else {
            panic!("expected js-client");
        };
        assert_eq!(cmd.api.to_str(), Some("api.json"));
        assert_eq!(cmd.output_dir.to_str(), Some("."));
        assert!(cmd.route_attributes.is_empty());
        assert!(!cmd.dry_run);
    }

    #[test]
    fn test_filename_required() {
        assert!(Cli::try_parse_from(["stone", "js-client"]).is_err());
    }
}
