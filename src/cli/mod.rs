//! Command-line interface for pdeps.
//!
//! # Commands
//!
//! - `generate` - Write the management and direct POMs and report them as
//!   attached artifacts
//! - `list` - Show the dependency records one pass would produce
//!
//! # Global Options
//!
//! - `--verbose` / `--quiet` - Log level (`debug` / `error`, default `info`)
//! - `--graph` - Path to the resolved-graph document (default `resolved-graph.toml`)
//!
//! # Example
//!
//! ```bash
//! # Generate both POMs next to the project's build output
//! pdeps generate
//!
//! # Preview the compile-scope records as JSON
//! pdeps --graph build/graph.json list --scope compile --format json
//! ```

mod generate;
mod list;


use crate::constants::DEFAULT_GRAPH_FILE;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use generate::GenerateCommand;
pub use list::ListCommand;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and embedders can choose the log level
/// without going through argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log directive used when `RUST_LOG` is unset (`info`, `debug`, `error`)
    pub log_level: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global `tracing` subscriber, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over [`log_level`](Self::log_level).
    /// Calling this more than once is harmless; later calls are ignored.
    pub fn init_logging(&self) {
        let level = self.log_level.as_deref().unwrap_or("info");
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Generate provided-scope and compile-scope POMs from a resolved dependency graph.
#[derive(Parser, Debug)]
#[command(
    name = "pdeps",
    about = "Generate managed and direct dependency POMs from a resolved dependency graph",
    version,
    long_about = "pdeps reads a resolved dependency graph and writes two POM descriptors: \
one pinning every non-test dependency under dependencyManagement with scope provided, \
one listing the same dependencies directly with scope compile. Exclusions recorded on \
each resolved artifact are carried over."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the resolved-graph document (TOML, or JSON with a .json extension)
    #[arg(short, long, global = true, env = "PDEPS_GRAPH", value_name = "PATH")]
    graph: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the management and direct POM files.
    ///
    /// See [`GenerateCommand`] for options.
    Generate(GenerateCommand),

    /// List the dependency records of one generation pass.
    ///
    /// See [`ListCommand`] for options.
    List(ListCommand),
}

impl Cli {
    /// Run the command with logging configured from the global flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
        }
    }

    /// Run the command with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let graph_path = self.graph_path();
        match self.command {
            Commands::Generate(cmd) => cmd.execute_with_graph_path(graph_path).await,
            Commands::List(cmd) => cmd.execute_with_graph_path(graph_path).await,
        }
    }

    fn graph_path(&self) -> PathBuf {
        self.graph.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_FILE))
    }
}
