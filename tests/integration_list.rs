use pdeps_cli::test_utils::GraphFixture;
use predicates::prelude::*;

mod common;
use common::TestProject;

#[test]
fn test_list_default_scope_is_provided() {
    let project = TestProject::new();
    project.write_graph(&GraphFixture::basic());

    project
        .pdeps()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("GROUP ID"))
        .stdout(predicate::str::contains("lib1"))
        .stdout(predicate::str::contains("x:y"))
        .stdout(predicate::str::contains("lib2").not())
        .stdout(predicate::str::contains("compile").not());

    assert!(!project.path().join("target").exists());
}

#[test]
fn test_list_compile_json() {
    let project = TestProject::new();
    project.write_graph(&GraphFixture::basic());

    let output =
        project.pdeps().args(["list", "--scope", "compile", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["artifactId"], "lib1");
    assert_eq!(records[0]["scope"], "compile");
    assert!(records[0].get("exclusions").is_none());
    assert_eq!(records[1]["artifactId"], "lib3");
    assert_eq!(records[1]["exclusions"][0]["groupId"], "x");
    assert_eq!(records[1]["exclusions"][0]["artifactId"], "y");
    assert_eq!(records[1]["exclusions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_list_test_scope_relabels_non_test_artifacts() {
    let project = TestProject::new();
    project.write_graph(&GraphFixture::basic());

    let output =
        project.pdeps().args(["list", "--scope", "test", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    // lib2 is itself test-scoped and skipped; the others take the target scope.
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["artifactId"], "lib1");
    assert_eq!(records[0]["scope"], "test");
    assert_eq!(records[1]["artifactId"], "lib3");
    assert_eq!(records[1]["scope"], "test");
}
