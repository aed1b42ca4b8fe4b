//! Constants shared across pdeps.
//!
//! File names, suffixes and fixed POM values live here so the generator, the
//! CLI and the tests agree on them.

/// Default name of the resolved-graph document looked up in the current directory.
pub const DEFAULT_GRAPH_FILE: &str = "resolved-graph.toml";

/// Default build directory, relative to the resolved-graph document.
pub const DEFAULT_BUILD_DIRECTORY: &str = "target";

/// Suffix appended to the configured artifact id when deriving the default
/// management manifest artifact id.
pub const MANAGEMENT_ARTIFACT_SUFFIX: &str = "-dependencies";

/// Suffix appended to the project artifact id when deriving the default
/// direct manifest artifact id.
pub const COMPILE_ARTIFACT_SUFFIX: &str = "-compile";

/// File suffix of the management manifest (`<artifactId>-dependencies.pom`).
pub const MANAGEMENT_FILE_SUFFIX: &str = "-dependencies.pom";

/// File suffix of the direct manifest (`<artifactId>-compile.pom`).
pub const DIRECT_FILE_SUFFIX: &str = "-compile.pom";

/// POM model version written into every generated descriptor.
pub const POM_MODEL_VERSION: &str = "4.0.0";

/// Packaging of generated descriptors; also the attached artifact type.
pub const POM_PACKAGING: &str = "pom";

/// Dependency type Maven assumes when none is written.
pub const DEFAULT_DEPENDENCY_TYPE: &str = "jar";

/// Maven POM namespace.
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// XML Schema instance namespace.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// `xsi:schemaLocation` value for 4.0.0 POMs.
pub const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Indentation width of generated XML.
pub const XML_INDENT: usize = 2;
