//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Ansys Report - Software and environment report for bug reports.
#[derive(Debug, Parser)]
#[command(name = "ansys-report")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides report.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory searched for report.yml (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only print the report and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full report (default if no command specified)
    Show(ShowArgs),

    /// Print only the Ansys installation and environment-variable blocks
    ProjectInfo(ProjectInfoArgs),

    /// Print the version of this tool
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain text
    #[default]
    Text,
    /// HTML table
    Html,
    /// JSON document
    Json,
}

/// Options shared by commands that know about Ansys libraries and variables.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProjectArgs {
    /// Environment variable to report (repeatable, comma-separated)
    #[arg(long = "var", value_name = "NAME", value_delimiter = ',')]
    pub vars: Vec<String>,

    /// Ansys library version as NAME=VERSION (repeatable)
    #[arg(long = "lib", value_name = "NAME=VERSION", value_parser = parse_lib)]
    pub libs: Vec<(String, String)>,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Extra packages to report (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub additional: Vec<String>,

    /// Number of package columns in HTML output
    #[arg(long)]
    pub ncol: Option<usize>,

    /// Width of the text report
    #[arg(long)]
    pub text_width: Option<usize>,

    /// Sort packages alphabetically
    #[arg(long)]
    pub sort: bool,

    /// Skip GPU detection (use if the GPU query crashes)
    #[arg(long)]
    pub no_gpu: bool,

    /// Python interpreter used to probe packages
    #[arg(long, env = "ANSYS_REPORT_PYTHON")]
    pub python: Option<PathBuf>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the `project-info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProjectInfoArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse a `NAME=VERSION` pair.
pub fn parse_lib(s: &str) -> Result<(String, String), String> {
    let (name, version) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VERSION, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("library name is empty in '{}'", s));
    }
    Ok((name.to_string(), version.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lib_splits_on_first_equals() {
        assert_eq!(
            parse_lib("MyLib=v1=beta"),
            Ok(("MyLib".to_string(), "v1=beta".to_string()))
        );
    }

    #[test]
    fn parse_lib_rejects_missing_equals() {
        assert!(parse_lib("MyLib").is_err());
        assert!(parse_lib("=v1.2").is_err());
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["ansys-report"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_parses_report_options() {
        let cli = Cli::parse_from([
            "ansys-report",
            "show",
            "--format",
            "html",
            "--ncol",
            "4",
            "--sort",
            "--no-gpu",
            "--additional",
            "a,b",
            "--var",
            "MYVAR_1,MYVAR_2",
            "--lib",
            "MyLib1=v1.2",
        ]);
        let Some(Commands::Show(args)) = cli.command else {
            panic!("Expected Show command");
        };
        assert_eq!(args.format, Format::Html);
        assert_eq!(args.ncol, Some(4));
        assert!(args.sort);
        assert!(args.no_gpu);
        assert_eq!(args.additional, ["a", "b"]);
        assert_eq!(args.project.vars, ["MYVAR_1", "MYVAR_2"]);
        assert_eq!(
            args.project.libs,
            [("MyLib1".to_string(), "v1.2".to_string())]
        );
    }

    #[test]
    fn project_info_accepts_repeated_libs() {
        let cli = Cli::parse_from([
            "ansys-report",
            "project-info",
            "--lib",
            "A=1",
            "--lib",
            "B=2",
        ]);
        let Some(Commands::ProjectInfo(args)) = cli.command else {
            panic!("Expected ProjectInfo command");
        };
        assert_eq!(args.project.libs.len(), 2);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ansys-report", "version", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
