//! Dependency lists and the generated POM model.
//!
//! [`build_dependency_list`] turns the resolved artifact collection into the
//! dependency records of one generated manifest. It is called twice per run
//! over the *same* collection:
//!
//! | Pass | Target scope | Lands in |
//! |------|--------------|----------|
//! | management | `provided` | `<dependencyManagement>` |
//! | direct | `compile` | `<dependencies>` |
//!
//! Every non-test artifact appears in both, relabelled to the pass's scope.
//! The two manifests are not a partition of the input by original scope.
//!
//! [`Pom`] holds one generated descriptor; see [`pom_writer`] for its XML form.

pub mod pom_writer;

use crate::constants::{POM_MODEL_VERSION, POM_PACKAGING};
use crate::filter::resolve_exclusions;
use crate::models::{Artifact, Scope};
use serde::Serialize;
use std::collections::HashSet;

/// A transitive dependency left out when the owning dependency is pulled in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    pub group_id: String,
    pub artifact_id: String,
}

impl Exclusion {
    /// Parse a `groupId:artifactId` pattern.
    ///
    /// Returns `None` unless the pattern has exactly two non-empty segments.
    pub fn parse(pattern: &str) -> Option<Self> {
        let mut segments = pattern.split(':');
        let group_id = segments.next()?;
        let artifact_id = segments.next()?;
        if segments.next().is_some() || group_id.is_empty() || artifact_id.is_empty() {
            return None;
        }
        Some(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
        })
    }
}

/// One `<dependency>` entry of a generated POM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(rename = "type")]
    pub r#type: String,
    pub scope: Scope,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<Exclusion>,
}

/// Build the dependency records of one generated manifest.
///
/// Test-scoped artifacts are skipped whatever `target_scope` is. Every other
/// artifact yields a record in input order whose scope is `target_scope` and
/// whose version is the artifact's base version. Exclusion patterns from the
/// artifact's filter are de-duplicated on the raw pattern string, keeping the
/// first occurrence; patterns that are not `groupId:artifactId` are dropped.
pub fn build_dependency_list(artifacts: &[Artifact], target_scope: Scope) -> Vec<DependencyRecord> {
    let mut records = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        if artifact.scope == Scope::Test {
            tracing::debug!("Skipping test-scoped artifact {}", artifact.coordinates());
            continue;
        }

        let exclusions = exclusions_for(artifact);
        tracing::debug!(
            "{} ({}) -> {} with {} exclusion(s)",
            artifact.coordinates(),
            artifact.scope,
            target_scope,
            exclusions.len()
        );

        records.push(DependencyRecord {
            group_id: artifact.group_id.clone(),
            artifact_id: artifact.artifact_id.clone(),
            version: artifact.base_version().to_string(),
            classifier: artifact.classifier.clone(),
            r#type: artifact.r#type.clone(),
            scope: target_scope,
            exclusions,
        });
    }

    records
}

fn exclusions_for(artifact: &Artifact) -> Vec<Exclusion> {
    let mut seen = HashSet::new();
    resolve_exclusions(artifact.filter.as_ref())
        .into_iter()
        .filter(|pattern| seen.insert(pattern.clone()))
        .filter_map(|pattern| Exclusion::parse(&pattern))
        .collect()
}

/// Which section of the POM the dependency list is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PomKind {
    /// `<dependencyManagement><dependencies>`: pinned, not pulled in
    Management(Vec<DependencyRecord>),
    /// `<dependencies>`: pulled in directly
    Direct(Vec<DependencyRecord>),
}

impl PomKind {
    pub fn dependencies(&self) -> &[DependencyRecord] {
        match self {
            Self::Management(deps) | Self::Direct(deps) => deps,
        }
    }
}

/// A generated project descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pom {
    pub model_version: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub kind: PomKind,
}

impl Pom {
    /// A `pom`-packaged descriptor with model version 4.0.0.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        kind: PomKind,
    ) -> Self {
        Self {
            model_version: POM_MODEL_VERSION.to_string(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            packaging: POM_PACKAGING.to_string(),
            kind,
        }
    }

    pub fn dependencies(&self) -> &[DependencyRecord] {
        self.kind.dependencies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterNode;
    use crate::test_utils::ArtifactBuilder;

    fn sample_artifacts() -> Vec<Artifact> {
        vec![
            ArtifactBuilder::new("a", "lib1", "1.0").scope(Scope::Compile).build(),
            ArtifactBuilder::new("b", "lib2", "2.0").scope(Scope::Test).build(),
            ArtifactBuilder::new("c", "lib3", "3.0")
                .scope(Scope::Provided)
                .filter(FilterNode::excludes(["x:y", "x:y", "bad"]))
                .build(),
        ]
    }

    fn xy() -> Exclusion {
        Exclusion {
            group_id: "x".to_string(),
            artifact_id: "y".to_string(),
        }
    }

    #[test]
    fn test_management_pass() {
        let records = build_dependency_list(&sample_artifacts(), Scope::Provided);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].group_id, "a");
        assert_eq!(records[0].artifact_id, "lib1");
        assert_eq!(records[0].version, "1.0");
        assert_eq!(records[0].scope, Scope::Provided);
        assert!(records[0].exclusions.is_empty());

        assert_eq!(records[1].artifact_id, "lib3");
        assert_eq!(records[1].scope, Scope::Provided);
        assert_eq!(records[1].exclusions, vec![xy()]);
    }

    #[test]
    fn test_direct_pass_relabels_same_artifacts() {
        let provided = build_dependency_list(&sample_artifacts(), Scope::Provided);
        let compile = build_dependency_list(&sample_artifacts(), Scope::Compile);

        assert_eq!(compile.len(), provided.len());
        for (direct, managed) in compile.iter().zip(&provided) {
            assert_eq!(direct.scope, Scope::Compile);
            assert_eq!(direct.artifact_id, managed.artifact_id);
            assert_eq!(direct.exclusions, managed.exclusions);
        }
    }

    #[test]
    fn test_test_scope_skipped_for_every_target() {
        let artifacts = vec![ArtifactBuilder::new("t", "junit", "4.13").scope(Scope::Test).build()];
        for scope in [Scope::Compile, Scope::Provided, Scope::Runtime, Scope::Test, Scope::System] {
            assert!(build_dependency_list(&artifacts, scope).is_empty());
        }
    }

    #[test]
    fn test_runtime_artifact_takes_target_scope() {
        let artifacts =
            vec![ArtifactBuilder::new("r", "driver", "9").scope(Scope::Runtime).build()];
        assert_eq!(build_dependency_list(&artifacts, Scope::Provided)[0].scope, Scope::Provided);
        assert_eq!(build_dependency_list(&artifacts, Scope::Compile)[0].scope, Scope::Compile);
    }

    #[test]
    fn test_identity_fields_copied() {
        let artifacts = vec![
            ArtifactBuilder::new("g", "snap", "1.0-20240101.120000-3")
                .base_version("1.0-SNAPSHOT")
                .classifier("sources")
                .artifact_type("zip")
                .scope(Scope::System)
                .build(),
        ];
        let record = &build_dependency_list(&artifacts, Scope::Compile)[0];
        assert_eq!(record.version, "1.0-SNAPSHOT");
        assert_eq!(record.classifier.as_deref(), Some("sources"));
        assert_eq!(record.r#type, "zip");
    }

    #[test]
    fn test_conjunction_union_in_child_order() {
        let artifacts = vec![
            ArtifactBuilder::new("g", "a", "1")
                .filter(FilterNode::and([
                    FilterNode::excludes(["p:q"]),
                    FilterNode::excludes(["m:n"]),
                ]))
                .build(),
        ];
        let record = &build_dependency_list(&artifacts, Scope::Compile)[0];
        let pairs: Vec<_> = record
            .exclusions
            .iter()
            .map(|e| format!("{}:{}", e.group_id, e.artifact_id))
            .collect();
        assert_eq!(pairs, vec!["p:q", "m:n"]);
    }

    #[test]
    fn test_dedup_on_raw_string_first_seen_order() {
        let artifacts = vec![
            ArtifactBuilder::new("g", "a", "1")
                .filter(FilterNode::and([
                    FilterNode::excludes(["b:c", "a:b"]),
                    FilterNode::excludes(["a:b", "b:c", "d:e"]),
                ]))
                .build(),
        ];
        let record = &build_dependency_list(&artifacts, Scope::Compile)[0];
        let ids: Vec<_> = record.exclusions.iter().map(|e| e.group_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "d"]);
    }

    #[test]
    fn test_malformed_patterns_dropped() {
        let artifacts = vec![
            ArtifactBuilder::new("g", "a", "1")
                .filter(FilterNode::excludes(["badpattern", "a:b:c", ":b", "a:", "", "ok:yes"]))
                .build(),
        ];
        let record = &build_dependency_list(&artifacts, Scope::Provided)[0];
        assert_eq!(
            record.exclusions,
            vec![Exclusion {
                group_id: "ok".to_string(),
                artifact_id: "yes".to_string(),
            }]
        );
    }

    #[test]
    fn test_exclusion_parse() {
        assert_eq!(Exclusion::parse("x:y"), Some(xy()));
        assert_eq!(Exclusion::parse("x"), None);
        assert_eq!(Exclusion::parse("x:y:z"), None);
    }

    #[test]
    fn test_pom_defaults() {
        let pom = Pom::new("g", "a-dependencies", "1", PomKind::Management(Vec::new()));
        assert_eq!(pom.model_version, "4.0.0");
        assert_eq!(pom.packaging, "pom");
        assert!(pom.dependencies().is_empty());
    }
}
