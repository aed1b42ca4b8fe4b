//! pdeps - provided/compile dependency POM generator
//!
//! Given a project's resolved dependency graph, pdeps writes two synthetic
//! Maven descriptors:
//!
//! - `<artifactId>-dependencies.pom` pins every non-test dependency under
//!   `<dependencyManagement>` with scope `provided`;
//! - `<compileArtifactId>-compile.pom` lists the same dependencies under
//!   `<dependencies>` with scope `compile`.
//!
//! Exclusions recorded on each resolved artifact, possibly nested inside
//! conjunction filters, are carried over to the matching `<dependency>`.
//!
//! # Core Modules
//!
//! - [`filter`] - Filter trees and exclusion resolution
//! - [`manifest`] - Dependency records, the POM model and its XML writer
//! - [`models`] - Resolved artifacts, scopes and the resolved-graph document
//! - [`config`] - Generation settings and their defaults
//! - [`generator`] - Builds and persists both POMs
//!
//! ## Supporting Modules
//!
//! - [`cli`] - Command-line interface
//! - [`core`] - Error types and user-facing error reporting
//! - [`utils`] - Atomic writes and checksums
//!
//! # Resolved-Graph Format
//!
//! ```toml
//! [project]
//! group-id = "org.example"
//! artifact-id = "app"
//! version = "1.0.0"
//!
//! [[artifacts]]
//! group-id = "org.slf4j"
//! artifact-id = "slf4j-api"
//! version = "2.0.13"
//! scope = "compile"
//! filter = { kind = "excludes", patterns = ["org.slf4j:slf4j-simple"] }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use pdeps_cli::manifest::build_dependency_list;
//! use pdeps_cli::models::{ResolvedGraph, Scope};
//!
//! let graph = ResolvedGraph::from_toml_str(r#"
//! [project]
//! group-id = "g"
//! artifact-id = "app"
//! version = "1"
//!
//! [[artifacts]]
//! group-id = "a"
//! artifact-id = "lib"
//! version = "1.0"
//! scope = "runtime"
//! "#).unwrap();
//!
//! let records = build_dependency_list(&graph.artifacts, Scope::Provided);
//! assert_eq!(records[0].scope, Scope::Provided);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod filter;
pub mod generator;
pub mod manifest;
pub mod models;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
