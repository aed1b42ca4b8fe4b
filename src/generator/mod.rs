//! Generation of the management and direct POMs.
//!
//! A run builds both descriptors from the same resolved artifact collection,
//! writes them to the target directory and reports each written file as an
//! [`AttachedArtifact`] for the host build to register.
//!
//! ```text
//! <target>/<artifactId><-dependencies.pom>   dependencyManagement, scope provided
//! <target>/<compileArtifactId><-compile.pom> dependencies, scope compile
//! ```

use crate::config::GenerationConfig;
use crate::constants::{DIRECT_FILE_SUFFIX, MANAGEMENT_FILE_SUFFIX, POM_PACKAGING};
use crate::core::PdepsError;
use crate::manifest::{Pom, PomKind, build_dependency_list};
use crate::models::{Artifact, Scope};
use crate::utils::fs::{calculate_checksum, ensure_dir, safe_write};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A generated file, identified the way the host build should register it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachedArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub file: PathBuf,
    /// `sha256:<hex>` of the written file; absent on dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl AttachedArtifact {
    /// `groupId:artifactId:type:version`
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}:{}", self.group_id, self.artifact_id, self.r#type, self.version)
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The management descriptor
    pub management: Pom,
    /// The direct descriptor
    pub direct: Pom,
    /// Written (or, on dry runs, would-be) files in write order
    pub attached: Vec<AttachedArtifact>,
}

/// Builds and persists the two descriptors for one configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GenerationConfig,
    dry_run: bool,
}

impl Generator {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Build the descriptors without touching the file system.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The management descriptor: every non-test artifact, scope `provided`.
    pub fn management_pom(&self, artifacts: &[Artifact]) -> Pom {
        Pom::new(
            &self.config.group_id,
            &self.config.artifact_id,
            &self.config.version,
            PomKind::Management(build_dependency_list(artifacts, Scope::Provided)),
        )
    }

    /// The direct descriptor: every non-test artifact, scope `compile`.
    pub fn direct_pom(&self, artifacts: &[Artifact]) -> Pom {
        Pom::new(
            &self.config.group_id,
            &self.config.compile_artifact_id,
            &self.config.version,
            PomKind::Direct(build_dependency_list(artifacts, Scope::Compile)),
        )
    }

    /// Build both descriptors and persist them.
    ///
    /// Any failure to render or write aborts the run; nothing is retried.
    pub fn generate(&self, artifacts: &[Artifact]) -> Result<GenerationReport> {
        let management = self.management_pom(artifacts);
        let direct = self.direct_pom(artifacts);

        if !self.dry_run {
            ensure_dir(&self.config.target_dir).map_err(|e| PdepsError::PomWriteError {
                path: self.config.target_dir.display().to_string(),
                reason: format!("{e:#}"),
            })?;
        }

        let attached = vec![
            self.persist(&management, MANAGEMENT_FILE_SUFFIX)?,
            self.persist(&direct, DIRECT_FILE_SUFFIX)?,
        ];

        Ok(GenerationReport {
            management,
            direct,
            attached,
        })
    }

    fn persist(&self, pom: &Pom, suffix: &str) -> Result<AttachedArtifact> {
        let file = pom_path(&self.config.target_dir, &pom.artifact_id, suffix);
        let xml = pom.to_xml()?;

        let checksum = if self.dry_run {
            tracing::info!("Would write {} ({} dependencies)", file.display(), pom.dependencies().len());
            None
        } else {
            safe_write(&file, &xml)
                .map_err(|e| PdepsError::PomWriteError {
                    path: file.display().to_string(),
                    reason: format!("{e:#}"),
                })
                .context("Failed to generate pom")?;
            tracing::info!("Wrote {} ({} dependencies)", file.display(), pom.dependencies().len());
            Some(calculate_checksum(&file)?)
        };

        Ok(AttachedArtifact {
            group_id: self.config.group_id.clone(),
            artifact_id: pom.artifact_id.clone(),
            version: self.config.version.clone(),
            r#type: POM_PACKAGING.to_string(),
            file,
            checksum,
        })
    }
}

/// `<dir>/<artifactId><suffix>`
pub fn pom_path(dir: &Path, artifact_id: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{artifact_id}{suffix}"))
}
