//! The `generate` command.
//!
//! Loads the resolved graph, resolves the generation configuration and writes
//! both POM files. Each written file is then reported as an attached artifact,
//! one per line or as a JSON array for the host build to consume:
//!
//! ```text
//! ✓ Generated 2 POM files in target
//!   org.example:app-dependencies:pom:1.0.0 -> target/app-dependencies-dependencies.pom
//!   org.example:app-compile:pom:1.0.0 -> target/app-compile-compile.pom
//! ```

use crate::config::GenerationConfig;
use crate::generator::{AttachedArtifact, Generator};
use crate::models::{GenerateOverrides, ResolvedGraph};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Write the management (`provided`) and direct (`compile`) POMs.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Directory to write the POM files to [default: the project's build directory]
    #[arg(long, env = "PDEPS_TARGET_DIR", value_name = "DIR")]
    target_dir: Option<PathBuf>,

    /// Group id of the generated POMs [default: the project's group id]
    #[arg(long, env = "PDEPS_GROUP_ID")]
    group_id: Option<String>,

    /// Artifact id of the management POM [default: <project>-dependencies]
    #[arg(long, env = "PDEPS_ARTIFACT_ID")]
    artifact_id: Option<String>,

    /// Artifact id of the direct POM [default: <project>-compile]
    #[arg(long, env = "PDEPS_COMPILE_ARTIFACT_ID")]
    compile_artifact_id: Option<String>,

    /// Version of the generated POMs [default: the project's version]
    #[arg(long = "pom-version", env = "PDEPS_VERSION", value_name = "VERSION")]
    pom_version: Option<String>,

    /// Build the POMs and report where they would go without writing them
    #[arg(long)]
    dry_run: bool,

    /// Output format for the attached artifact report (text, json)
    #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

impl GenerateCommand {
    pub async fn execute_with_graph_path(self, graph_path: PathBuf) -> Result<()> {
        let graph = ResolvedGraph::load(&graph_path).await?;
        let config = GenerationConfig::resolve(&graph, &self.overrides())?;
        tracing::debug!(
            "Generating {}:{} and {}:{} into {}",
            config.group_id,
            config.artifact_id,
            config.group_id,
            config.compile_artifact_id,
            config.target_dir.display()
        );

        let generator = Generator::new(config).with_dry_run(self.dry_run);
        let report = generator.generate(&graph.artifacts)?;

        self.print_report(&report.attached, generator.config())
    }

    fn overrides(&self) -> GenerateOverrides {
        GenerateOverrides {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            compile_artifact_id: self.compile_artifact_id.clone(),
            version: self.pom_version.clone(),
            target_dir: self.target_dir.clone(),
        }
    }

    fn print_report(&self, attached: &[AttachedArtifact], config: &GenerationConfig) -> Result<()> {
        if self.format == "json" {
            let json = serde_json::to_string_pretty(attached)
                .context("Failed to serialize attached artifacts")?;
            println!("{json}");
            return Ok(());
        }

        let verb = if self.dry_run { "Would generate" } else { "Generated" };
        println!(
            "{} {verb} {} POM files in {}",
            "✓".green(),
            attached.len(),
            config.target_dir.display()
        );
        for artifact in attached {
            println!("  {} -> {}", artifact.coordinates().bold(), artifact.file.display());
        }
        Ok(())
    }
}
