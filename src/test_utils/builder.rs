//! Fluent builder for resolved artifacts.

use crate::constants::DEFAULT_DEPENDENCY_TYPE;
use crate::filter::FilterNode;
use crate::models::{Artifact, Scope};

/// Builds an [`Artifact`] with type `jar`, scope `compile` and no filter
/// unless told otherwise.
#[derive(Debug, Clone)]
pub struct ArtifactBuilder {
    artifact: Artifact,
}

impl ArtifactBuilder {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            artifact: Artifact {
                group_id: group_id.to_string(),
                artifact_id: artifact_id.to_string(),
                version: version.to_string(),
                base_version: None,
                classifier: None,
                r#type: DEFAULT_DEPENDENCY_TYPE.to_string(),
                scope: Scope::Compile,
                filter: None,
            },
        }
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.artifact.scope = scope;
        self
    }

    pub fn base_version(mut self, base_version: &str) -> Self {
        self.artifact.base_version = Some(base_version.to_string());
        self
    }

    pub fn classifier(mut self, classifier: &str) -> Self {
        self.artifact.classifier = Some(classifier.to_string());
        self
    }

    pub fn artifact_type(mut self, r#type: &str) -> Self {
        self.artifact.r#type = r#type.to_string();
        self
    }

    pub fn filter(mut self, filter: FilterNode) -> Self {
        self.artifact.filter = Some(filter);
        self
    }

    pub fn build(self) -> Artifact {
        self.artifact
    }
}
