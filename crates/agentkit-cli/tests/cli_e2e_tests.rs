//! CLI end-to-end tests that invoke the compiled `agentkit` binary
//! against local fixture registries.

use std::path::Path;

use agentkit_test_utils::{TestProject, TestRegistry};
use assert_cmd::Command;
use predicates::prelude::*;

fn agentkit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("agentkit").expect("Failed to find agentkit binary");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("GITHUB_TOKEN")
        .env_remove("AGENTKIT_AUTH");
    cmd
}

fn source_of(registry: &TestRegistry) -> String {
    registry.root().to_string_lossy().into_owned()
}

#[test]
fn test_help_lists_commands() {
    let project = TestProject::new();
    agentkit(project.root())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("add-skill"))
        .stdout(predicate::str::contains("unoverride"));
}

#[test]
fn test_init_add_install_round() {
    let registry = TestRegistry::standard_kit();
    let project = TestProject::new();
    let source = source_of(&registry);

    agentkit(project.root())
        .args(["init", "-k", "minimal", "-s", &source])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created agent.config.json"));

    agentkit(project.root())
        .args(["add", "workflows", "deploy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added workflows/deploy to include list."));

    agentkit(project.root())
        .args(["remove-rule", "clean-code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added rules/clean-code to exclude list."));

    agentkit(project.root())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully assembled 2/2 modules"))
        .stdout(predicate::str::contains("Include: workflows/deploy"))
        .stdout(predicate::str::contains("Exclude: rules/clean-code"));

    project.assert_agent_file("skills/docker-expert.md", "# Docker expert");
    project.assert_agent_file("workflows/deploy.md", "# Deploy workflow");
    project.assert_agent_file("ARCHITECTURE.md", "# Architecture");
    project.assert_agent_missing("rules/clean-code.md");
}

#[test]
fn test_install_reports_partial_count() {
    let registry = TestRegistry::standard_kit();
    let project = TestProject::new();
    project.write_config(&source_of(&registry), "presets/minimal", &["skills/ghost"], &[], &[]);

    agentkit(project.root())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully assembled 2/3 modules"))
        .stderr(predicate::str::contains("Module not found: skills/ghost"));
}

#[test]
fn test_install_applies_override() {
    let registry = TestRegistry::standard_kit();
    let project = TestProject::new();
    project.write_config(&source_of(&registry), "presets/minimal", &[], &[], &[]);
    project.file("my-rules.md", "# My rules");

    agentkit(project.root())
        .args(["override", "rules/clean-code.md", "./my-rules.md"])
        .assert()
        .success();
    agentkit(project.root()).arg("install").assert().success();

    project.assert_agent_file("rules/clean-code.md", "# My rules");
}

#[test]
fn test_install_without_terminal_keeps_existing_agent_dir() {
    let registry = TestRegistry::standard_kit();
    let project = TestProject::new();
    project.write_config(&source_of(&registry), "presets/minimal", &[], &[], &[]);
    project.file(".agent/skills/docker-expert.md", "kept");

    agentkit(project.root())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));
    project.assert_agent_file("skills/docker-expert.md", "kept");

    agentkit(project.root()).args(["install", "--force"]).assert().success();
    project.assert_agent_file("skills/docker-expert.md", "# Docker expert");
}

#[test]
fn test_install_without_config_fails() {
    let project = TestProject::new();
    agentkit(project.root())
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("agent.config.json not found"));
}

#[test]
fn test_unknown_preset_fails() {
    let registry = TestRegistry::standard_kit();
    let project = TestProject::new();
    project.write_config(&source_of(&registry), "presets/ghost", &[], &[], &[]);

    agentkit(project.root())
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset \"presets/ghost\" not found"));
}

#[test]
fn test_add_with_unknown_category_fails() {
    let project = TestProject::new();
    project.write_config("./kit", "presets/minimal", &[], &[], &[]);

    agentkit(project.root())
        .args(["add", "plugins", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category must be one of"));
}

#[test]
fn test_list_prints_presets_from_source() {
    let registry = TestRegistry::standard_kit();
    let project = TestProject::new();

    agentkit(project.root())
        .args(["list", "-s", &source_of(&registry)])
        .assert()
        .success()
        .stdout(predicate::str::contains("minimal"))
        .stdout(predicate::str::contains("Full web development kit"))
        .stdout(predicate::str::contains("Modules: 7"));

    assert_eq!(std::fs::read_dir(project.root()).unwrap().count(), 0);
}

#[test]
fn test_list_without_presets_dir_fails() {
    let registry = TestRegistry::new().file("registry/skills/x.md", "x");
    let project = TestProject::new();

    agentkit(project.root())
        .args(["list", "-s", &source_of(&registry)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No presets folder found in registry"));
}
