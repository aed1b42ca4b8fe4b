//! Resolved-graph document fixtures.

/// A named resolved-graph document.
#[derive(Debug, Clone)]
pub struct GraphFixture {
    /// File name the fixture should be written as
    pub file_name: &'static str,
    /// Document content
    pub content: String,
}

impl GraphFixture {
    /// Three artifacts: `a:lib1` (compile), `b:lib2` (test) and `c:lib3`
    /// (provided, excluding `x:y` twice plus a malformed pattern).
    pub fn basic() -> Self {
        Self {
            file_name: "resolved-graph.toml",
            content: r#"[project]
group-id = "org.example"
artifact-id = "app"
version = "1.0.0"

[[artifacts]]
group-id = "a"
artifact-id = "lib1"
version = "1.0"
scope = "compile"

[[artifacts]]
group-id = "b"
artifact-id = "lib2"
version = "2.0"
scope = "test"

[[artifacts]]
group-id = "c"
artifact-id = "lib3"
version = "3.0"
scope = "provided"
filter = { kind = "excludes", patterns = ["x:y", "x:y", "bad"] }
"#
            .to_string(),
        }
    }

    /// A runtime artifact with a nested conjunction filter, one branch of
    /// which is a kind without exclusion semantics.
    pub fn nested_filters() -> Self {
        Self {
            file_name: "resolved-graph.json",
            content: r#"{
  "project": {"group-id": "org.example", "artifact-id": "svc", "version": "2.0.0", "build-directory": "build"},
  "generate": {"group-id": "org.example.platform"},
  "artifacts": [
    {"group-id": "org.db", "artifact-id": "driver", "version": "9.1", "scope": "runtime",
     "filter": {"kind": "AndArtifactFilter", "filters": [
        {"kind": "ExcludesArtifactFilter", "patterns": ["commons-logging:commons-logging"]},
        {"kind": "ScopeArtifactFilter", "scope": "runtime"},
        {"kind": "and", "filters": [{"kind": "excludes", "patterns": ["log4j:log4j", "commons-logging:commons-logging"]}]}
     ]}}
  ]
}
"#
            .to_string(),
        }
    }

    /// Not a valid document.
    pub fn invalid_syntax() -> Self {
        Self {
            file_name: "resolved-graph.toml",
            content: "[project\ngroup-id = \n".to_string(),
        }
    }
}
