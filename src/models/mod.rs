//! Shared data models for pdeps operations
//!
//! The resolved-graph document is the tool's only input. It stands in for the
//! host build's dependency resolution phase and records:
//!
//! - the project identity the generated POMs default to ([`ProjectIdentity`]),
//! - optional generation overrides ([`GenerateOverrides`]),
//! - every resolved artifact, in resolution order ([`Artifact`]).
//!
//! Keys are kebab-case in both the TOML and JSON forms.

use crate::constants::{DEFAULT_BUILD_DIRECTORY, DEFAULT_DEPENDENCY_TYPE};
use crate::core::PdepsError;
use crate::filter::FilterNode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Dependency scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Available on every classpath and pulled transitively
    Compile,
    /// Expected to be supplied by the runtime container
    Provided,
    /// Needed at runtime only
    Runtime,
    /// Test classpath only; never written to a generated POM
    Test,
    /// Supplied from an explicit system path
    System,
}

impl Scope {
    /// Maven's name for the scope.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
            Self::Test => "test",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compile" => Ok(Self::Compile),
            "provided" => Ok(Self::Provided),
            "runtime" => Ok(Self::Runtime),
            "test" => Ok(Self::Test),
            "system" => Ok(Self::System),
            other => Err(anyhow::anyhow!(
                "Unknown scope '{other}', expected one of: compile, provided, runtime, test, system"
            )),
        }
    }
}

/// A resolved artifact as reported by the host build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    /// Resolved version, e.g. a timestamped snapshot
    pub version: String,
    /// Version with snapshot qualifiers folded back (`1.0-SNAPSHOT`).
    /// Falls back to [`version`](Self::version) when absent.
    #[serde(default)]
    pub base_version: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default = "default_type", rename = "type")]
    pub r#type: String,
    pub scope: Scope,
    /// Exclusions that applied while this artifact's dependencies were resolved
    #[serde(default)]
    pub filter: Option<FilterNode>,
}

fn default_type() -> String {
    DEFAULT_DEPENDENCY_TYPE.to_string()
}

impl Artifact {
    /// The version written into generated POMs.
    pub fn base_version(&self) -> &str {
        self.base_version.as_deref().unwrap_or(&self.version)
    }

    /// `groupId:artifactId:version` for log messages.
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Identity of the project whose dependencies were resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectIdentity {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Build output directory, relative to the document unless absolute
    #[serde(default = "default_build_directory")]
    pub build_directory: PathBuf,
}

fn default_build_directory() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_DIRECTORY)
}

/// The optional `[generate]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenerateOverrides {
    #[serde(default)]
    pub group_id: Option<String>,
    /// Artifact id of the management manifest
    #[serde(default)]
    pub artifact_id: Option<String>,
    /// Artifact id of the direct manifest
    #[serde(default)]
    pub compile_artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub target_dir: Option<PathBuf>,
}

/// The resolved-graph document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolvedGraph {
    pub project: ProjectIdentity,
    #[serde(default)]
    pub generate: GenerateOverrides,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    /// Directory the document was loaded from; relative paths resolve against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl ResolvedGraph {
    /// Load a resolved-graph document.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    /// A missing file is reported as [`PdepsError::GraphNotFound`] and a
    /// syntax or shape problem as [`PdepsError::GraphParseError`].
    pub async fn load(path: &Path) -> Result<Self> {
        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to access resolved graph: {}", path.display()))?;
        if !exists {
            return Err(PdepsError::GraphNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read resolved graph: {}", path.display()))?;

        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut graph = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
        .map_err(|reason| PdepsError::GraphParseError {
            file: path.display().to_string(),
            reason,
        })?;

        graph.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(
            "Loaded {} artifacts for {}:{}:{} from {}",
            graph.artifacts.len(),
            graph.project.group_id,
            graph.project.artifact_id,
            graph.project.version,
            path.display()
        );
        Ok(graph)
    }

    /// Parse a TOML document. The error is the parser's message.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Parse a JSON document. The error is the parser's message.
    pub fn from_json_str(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// The build directory, resolved against the document location.
    pub fn build_directory(&self) -> PathBuf {
        resolve_against(self.base_dir.as_deref(), &self.project.build_directory)
    }
}

/// Join `path` onto `base` unless it is already absolute.
pub fn resolve_against(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}
