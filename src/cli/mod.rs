//! CLI argument parsing for rubricgen
//!
//! Supports flags: --agents, --out, --config, --check, --format, --quiet, --verbose

pub mod output;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use output::OutputFormat;

/// Generate an architecture score rubric from an AGENTS.md policy document
#[derive(Parser, Debug)]
#[command(name = "rubricgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to AGENTS.md
    #[arg(long, env = "RUBRICGEN_AGENTS")]
    pub agents: Option<PathBuf>,

    /// Output markdown path
    #[arg(long, env = "RUBRICGEN_OUT")]
    pub out: Option<PathBuf>,

    /// TOML file supplying default `agents` and `out` paths
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verify the existing rubric matches the source instead of writing it
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "rubricgen",
            "--agents",
            "AGENTS.md",
            "--out",
            "docs/rubric.md",
            "--check",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.agents, Some(PathBuf::from("AGENTS.md")));
        assert_eq!(cli.out, Some(PathBuf::from("docs/rubric.md")));
        assert!(cli.check);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_duplicate_format_is_rejected() {
        let err = Cli::try_parse_from(["rubricgen", "--format", "json", "--format", "human"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
