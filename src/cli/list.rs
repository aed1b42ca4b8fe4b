//! The `list` command.
//!
//! Shows the dependency records one generation pass produces, without writing
//! anything. Useful for checking which exclusions survive filter resolution.
//!
//! ```text
//! GROUP ID  ARTIFACT ID  VERSION  SCOPE     EXCLUSIONS
//! a         lib1         1.0      provided  -
//! c         lib3         3.0      provided  x:y
//! ```

use crate::manifest::{DependencyRecord, build_dependency_list};
use crate::models::{ResolvedGraph, Scope};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// List the dependency records of one generation pass.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Target scope of the pass (provided = management POM, compile = direct POM)
    #[arg(long, default_value = "provided")]
    scope: Scope,

    /// Output format (table, json)
    #[arg(short = 'f', long, default_value = "table", value_parser = ["table", "json"])]
    format: String,
}

impl ListCommand {
    pub async fn execute_with_graph_path(self, graph_path: PathBuf) -> Result<()> {
        let graph = ResolvedGraph::load(&graph_path).await?;
        let records = build_dependency_list(&graph.artifacts, self.scope);

        if self.format == "json" {
            let json = serde_json::to_string_pretty(&records)
                .context("Failed to serialize dependency records")?;
            println!("{json}");
            return Ok(());
        }

        if records.is_empty() {
            println!("No dependencies found.");
            return Ok(());
        }

        print!("{}", format_table(&records));
        Ok(())
    }
}

fn exclusions_cell(record: &DependencyRecord) -> String {
    if record.exclusions.is_empty() {
        return "-".to_string();
    }
    record
        .exclusions
        .iter()
        .map(|e| format!("{}:{}", e.group_id, e.artifact_id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_table(records: &[DependencyRecord]) -> String {
    let headers = ["GROUP ID", "ARTIFACT ID", "VERSION", "SCOPE", "EXCLUSIONS"];
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            let artifact = match &r.classifier {
                Some(classifier) => format!("{}:{classifier}", r.artifact_id),
                None => r.artifact_id.clone(),
            };
            [
                r.group_id.clone(),
                artifact,
                r.version.clone(),
                r.scope.to_string(),
                exclusions_cell(r),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&format!("{}\n", header_line.trim_end().bold()));
    for row in rows {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
