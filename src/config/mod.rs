//! Generation configuration.
//!
//! The generated POMs are identified by a group id, two artifact ids (one per
//! manifest) and a version, and are written to a target directory. All five
//! values default from the resolved project:
//!
//! | Setting | Default |
//! |---------|---------|
//! | `group_id` | project group id |
//! | `artifact_id` | `<project artifact id>-dependencies` |
//! | `compile_artifact_id` | `<project artifact id>-compile` |
//! | `version` | project version |
//! | `target_dir` | project build directory |
//!
//! Overrides are layered on top, lowest precedence first: the `[generate]`
//! table of the resolved-graph document, then command-line flags and their
//! `PDEPS_*` environment variables. The generator only ever sees the resolved
//! [`GenerationConfig`]; it never looks at the project itself.

use crate::constants::{COMPILE_ARTIFACT_SUFFIX, MANAGEMENT_ARTIFACT_SUFFIX};
use crate::core::PdepsError;
use crate::models::{GenerateOverrides, ResolvedGraph, resolve_against};
use anyhow::Result;
use std::path::PathBuf;

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Group id of both generated POMs
    pub group_id: String,
    /// Artifact id of the management manifest
    pub artifact_id: String,
    /// Artifact id of the direct manifest
    pub compile_artifact_id: String,
    /// Version of both generated POMs
    pub version: String,
    /// Directory the POM files are written to
    pub target_dir: PathBuf,
}

impl GenerationConfig {
    /// Defaults derived from the graph's project identity.
    pub fn defaults_for(graph: &ResolvedGraph) -> Self {
        let project = &graph.project;
        Self {
            group_id: project.group_id.clone(),
            artifact_id: format!("{}{MANAGEMENT_ARTIFACT_SUFFIX}", project.artifact_id),
            compile_artifact_id: format!("{}{COMPILE_ARTIFACT_SUFFIX}", project.artifact_id),
            version: project.version.clone(),
            target_dir: graph.build_directory(),
        }
    }

    /// Apply one override layer. Unset fields keep their current value.
    ///
    /// A relative `target_dir` is resolved against `base_dir` when given.
    #[must_use]
    pub fn with_overrides(
        mut self,
        overrides: &GenerateOverrides,
        base_dir: Option<&std::path::Path>,
    ) -> Self {
        if let Some(group_id) = &overrides.group_id {
            self.group_id.clone_from(group_id);
        }
        if let Some(artifact_id) = &overrides.artifact_id {
            self.artifact_id.clone_from(artifact_id);
        }
        if let Some(compile_artifact_id) = &overrides.compile_artifact_id {
            self.compile_artifact_id.clone_from(compile_artifact_id);
        }
        if let Some(version) = &overrides.version {
            self.version.clone_from(version);
        }
        if let Some(target_dir) = &overrides.target_dir {
            self.target_dir = resolve_against(base_dir, target_dir);
        }
        self
    }

    /// Resolve the configuration for `graph`: defaults, then the document's
    /// `[generate]` table, then `cli` overrides. The result is validated.
    pub fn resolve(graph: &ResolvedGraph, cli: &GenerateOverrides) -> Result<Self> {
        let config = Self::defaults_for(graph)
            .with_overrides(&graph.generate, graph.base_dir.as_deref())
            .with_overrides(cli, None);
        config.validate()?;
        tracing::debug!("Resolved generation config: {config:?}");
        Ok(config)
    }

    /// Reject blank values, and artifact ids containing path separators.
    ///
    /// Artifact ids become output file names; group id and version do not.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("group id", &self.group_id),
            ("artifact id", &self.artifact_id),
            ("compile artifact id", &self.compile_artifact_id),
            ("version", &self.version),
        ] {
            if value.trim().is_empty() {
                return Err(PdepsError::ConfigError {
                    message: format!("{name} must not be blank"),
                }
                .into());
            }
        }
        for (name, value) in [
            ("artifact id", &self.artifact_id),
            ("compile artifact id", &self.compile_artifact_id),
        ] {
            if value.contains(['/', '\\']) {
                return Err(PdepsError::ConfigError {
                    message: format!("{name} '{value}' must not contain path separators"),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectIdentity;
    use std::path::Path;

    fn graph() -> ResolvedGraph {
        ResolvedGraph {
            project: ProjectIdentity {
                group_id: "org.example".to_string(),
                artifact_id: "app".to_string(),
                version: "1.2.3".to_string(),
                build_directory: PathBuf::from("target"),
            },
            generate: GenerateOverrides::default(),
            artifacts: Vec::new(),
            base_dir: Some(PathBuf::from("/work/app")),
        }
    }

    #[test]
    fn test_defaults_from_project() {
        let config = GenerationConfig::resolve(&graph(), &GenerateOverrides::default()).unwrap();
        assert_eq!(config.group_id, "org.example");
        assert_eq!(config.artifact_id, "app-dependencies");
        assert_eq!(config.compile_artifact_id, "app-compile");
        assert_eq!(config.version, "1.2.3");
        assert_eq!(config.target_dir, Path::new("/work/app").join("target"));
    }

    #[test]
    fn test_document_then_cli_precedence() {
        let mut graph = graph();
        graph.generate = GenerateOverrides {
            group_id: Some("org.example.bom".to_string()),
            artifact_id: Some("app-bom".to_string()),
            target_dir: Some(PathBuf::from("out")),
            ..GenerateOverrides::default()
        };
        let cli = GenerateOverrides {
            artifact_id: Some("cli-bom".to_string()),
            version: Some("9.9".to_string()),
            ..GenerateOverrides::default()
        };

        let config = GenerationConfig::resolve(&graph, &cli).unwrap();
        assert_eq!(config.group_id, "org.example.bom");
        assert_eq!(config.artifact_id, "cli-bom");
        assert_eq!(config.compile_artifact_id, "app-compile");
        assert_eq!(config.version, "9.9");
        assert_eq!(config.target_dir, Path::new("/work/app").join("out"));
    }

    #[test]
    fn test_blank_value_rejected() {
        let cli = GenerateOverrides {
            version: Some("  ".to_string()),
            ..GenerateOverrides::default()
        };
        let err = GenerationConfig::resolve(&graph(), &cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PdepsError>(),
            Some(PdepsError::ConfigError { .. })
        ));
        assert!(err.to_string().contains("version must not be blank"));
    }

    #[test]
    fn test_path_separator_rejected() {
        let cli = GenerateOverrides {
            compile_artifact_id: Some("../escape".to_string()),
            ..GenerateOverrides::default()
        };
        assert!(GenerationConfig::resolve(&graph(), &cli).is_err());
    }

    #[test]
    fn test_separators_allowed_outside_file_names() {
        let cli = GenerateOverrides {
            group_id: Some("org/example".to_string()),
            version: Some("1.0/rc".to_string()),
            ..GenerateOverrides::default()
        };
        let config = GenerationConfig::resolve(&graph(), &cli).unwrap();
        assert_eq!(config.group_id, "org/example");
        assert_eq!(config.version, "1.0/rc");
    }
}
