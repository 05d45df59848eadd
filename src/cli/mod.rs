use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::graph::RunOptions;
use crate::visualization::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Parser)]
#[command(
    name = "contract-graph",
    version,
    about = "Render import-linter ignore rules as a dependency graph",
    long_about = "Read the [tool.importlinter] section of a pyproject.toml, turn every contract's ignore_imports rule ('a.b -> c.d') into an edge and print the edge list, or write it as a Mermaid flow diagram to diagram.md."
)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "pyproject.toml")]
    pub config: String,
    /// Dotted segment to keep, e.g. for web.x.y.z, 1 shows x (negative keeps the full path)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub part: i64,
    /// Only show edges whose source contains this string
    #[arg(long)]
    pub only_source: Option<String>,
    /// Only show edges whose destination contains this string
    #[arg(long)]
    pub destination_type: Option<String>,
    /// Output renderer: stdout or mermaid
    #[arg(long, default_value = "stdout")]
    pub renderer: String,
    /// Only log errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
    /// Log level (overrides CONTRACT_GRAPH_LOG)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
    /// Print shell completions to stdout and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Build the immutable run options.
    ///
    /// # Errors
    /// Returns `GraphError::Configuration` if the renderer name is unknown.
    pub fn run_options(&self) -> crate::errors::Result<RunOptions> {
        let renderer: Renderer = self.renderer.parse()?;
        Ok(RunOptions {
            part: usize::try_from(self.part).ok(),
            config_path: PathBuf::from(&self.config),
            only_source: self.only_source.clone().filter(|s| !s.is_empty()),
            destination_filter: self.destination_type.clone().filter(|s| !s.is_empty()),
            renderer,
        })
    }
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
