//! Artifact filter trees and exclusion resolution.
//!
//! Every resolved artifact may carry a filter describing which of its
//! transitive artifacts were left out during resolution. Filters arrive in
//! the resolved-graph document as loosely-typed tables:
//!
//! ```toml
//! filter = { kind = "and", filters = [
//!     { kind = "excludes", patterns = ["org.slf4j:slf4j-simple"] },
//!     { kind = "scope", scope = "runtime" },
//! ] }
//! ```
//!
//! They are translated exactly once, while the document is deserialized, into
//! the owned [`FilterNode`] enum. From then on the tree is walked without any
//! further interpretation by [`resolve_exclusions`].
//!
//! # Soft failures
//!
//! Resolution never fails. A filter kind this module does not understand
//! becomes [`FilterNode::Unsupported`] and contributes no patterns (logged at
//! `warn`). A known kind whose member list is missing is logged at `error` and
//! treated as empty. Either way the generated POM is less restrictive rather
//! than absent.

use serde::Deserialize;

/// A filter expression attached to a resolved artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFilter")]
pub enum FilterNode {
    /// Leaf filter holding `groupId:artifactId` exclusion patterns in order.
    Excludes(Vec<String>),
    /// Conjunction of child filters; contributes the union of their patterns.
    And(Vec<FilterNode>),
    /// Any filter kind without exclusion semantics here.
    Unsupported {
        /// Kind name as written in the document
        kind: String,
    },
}

impl FilterNode {
    /// Build a leaf exclusion filter.
    pub fn excludes<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Excludes(patterns.into_iter().map(Into::into).collect())
    }

    /// Build a conjunction filter.
    pub fn and(children: impl IntoIterator<Item = FilterNode>) -> Self {
        Self::And(children.into_iter().collect())
    }

    /// Name of this node's kind, used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Self::Excludes(_) => "excludes",
            Self::And(_) => "and",
            Self::Unsupported { kind } => kind,
        }
    }
}

/// Filter as it appears in the resolved-graph document.
///
/// `kind` selects the variant; `patterns` belongs to `excludes` filters and
/// `filters` to `and` filters. Other keys are ignored so exporters can record
/// whatever else they know about a filter.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFilter {
    /// Filter kind, matched case-insensitively
    pub kind: String,
    /// Exclusion patterns of an `excludes` filter
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
    /// Children of an `and` filter
    #[serde(default)]
    pub filters: Option<Vec<RawFilter>>,
}

impl From<RawFilter> for FilterNode {
    fn from(raw: RawFilter) -> Self {
        match normalize_kind(&raw.kind).as_str() {
            "excludes" => match raw.patterns {
                Some(patterns) => FilterNode::Excludes(patterns),
                None => {
                    tracing::error!(
                        "Filter '{}' has no 'patterns' list; treating it as excluding nothing",
                        raw.kind
                    );
                    FilterNode::Excludes(Vec::new())
                }
            },
            "and" => match raw.filters {
                Some(children) => FilterNode::And(children.into_iter().map(Into::into).collect()),
                None => {
                    tracing::error!(
                        "Filter '{}' has no 'filters' list; treating it as excluding nothing",
                        raw.kind
                    );
                    FilterNode::And(Vec::new())
                }
            },
            _ => FilterNode::Unsupported { kind: raw.kind },
        }
    }
}

/// Lower-case the kind and drop an `ArtifactFilter` suffix, so exporters may
/// write either `excludes` or `ExcludesArtifactFilter`.
fn normalize_kind(kind: &str) -> String {
    let lower = kind.trim().to_ascii_lowercase();
    match lower.strip_suffix("artifactfilter") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => lower,
    }
}

/// Flatten a filter tree into its exclusion patterns.
///
/// Patterns are returned in traversal order. Duplicates are kept; the
/// manifest builder de-duplicates them. Unsupported nodes contribute nothing
/// and emit a warning naming their kind.
pub fn resolve_exclusions(filter: Option<&FilterNode>) -> Vec<String> {
    let mut patterns = Vec::new();
    if let Some(filter) = filter {
        collect_patterns(filter, &mut patterns);
    }
    patterns
}

fn collect_patterns(filter: &FilterNode, out: &mut Vec<String>) {
    match filter {
        FilterNode::Excludes(patterns) => out.extend(patterns.iter().cloned()),
        FilterNode::And(children) => {
            for child in children {
                collect_patterns(child, out);
            }
        }
        FilterNode::Unsupported { kind } => {
            tracing::warn!("Unsupported filter {kind}");
        }
    }
}
