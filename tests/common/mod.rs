//! Common test utilities for pdeps integration tests

// Not every helper is used by every test binary
#![allow(dead_code)]

use assert_cmd::Command;
use pdeps_cli::test_utils::GraphFixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch project directory holding a resolved-graph document.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a fixture under its own file name and return the path.
    pub fn write_graph(&self, fixture: &GraphFixture) -> PathBuf {
        let path = self.path().join(fixture.file_name);
        std::fs::write(&path, &fixture.content).expect("write graph");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path().join(relative))
            .unwrap_or_else(|e| panic!("read {relative}: {e}"))
    }

    /// `pdeps` run from the project directory with no inherited `PDEPS_*`
    /// settings and colors off.
    pub fn pdeps(&self) -> Command {
        let mut cmd = Command::cargo_bin("pdeps").expect("pdeps binary");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PDEPS_GRAPH")
            .env_remove("PDEPS_TARGET_DIR")
            .env_remove("PDEPS_GROUP_ID")
            .env_remove("PDEPS_ARTIFACT_ID")
            .env_remove("PDEPS_COMPILE_ARTIFACT_ID")
            .env_remove("PDEPS_VERSION");
        cmd
    }
}
