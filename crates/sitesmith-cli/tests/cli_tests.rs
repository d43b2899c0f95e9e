//! Integration tests for the sitesmith binary.
//!
//! Everything here runs offline: `generate` falls back to canned
//! suggestions without a key, and `deploy`/`publish` use `--dry-run`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sitesmith() -> Command {
    let mut cmd = Command::cargo_bin("sitesmith").expect("binary builds");
    // Keep assertions independent of the developer's environment.
    cmd.env_remove("SITESMITH_PLAN")
        .env_remove("SITESMITH_USER")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_the_pipeline_commands() {
    sitesmith()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("emit"))
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("publish"));
}

#[test]
fn version_matches_cargo() {
    sitesmith()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn classify_recognises_a_store() {
    sitesmith()
        .args(["classify", "an online store selling ceramic mugs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commerce"));
}

#[test]
fn classify_json_output_is_parseable() {
    let assert = sitesmith()
        .args([
            "classify",
            "my photography portfolio",
            "--output-format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["archetype"], "portfolio");
}

#[test]
fn classify_empty_description_exits_with_user_error() {
    sitesmith()
        .args(["classify", "   "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn generate_writes_a_model_file() {
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .args(["generate", "a restaurant with a seasonal menu"])
        .assert()
        .success();

    let model = temp.path().join("site-model.json");
    assert!(model.exists());
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(model).unwrap()).unwrap();
    assert_eq!(parsed["archetype"], "dining");
}

#[test]
fn emit_writes_web_files_from_a_generated_model() {
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .args(["generate", "an online store for plants"])
        .assert()
        .success();

    sitesmith()
        .current_dir(temp.path())
        .args(["emit", "web"])
        .assert()
        .success();

    let web = temp.path().join("dist").join("web");
    assert!(web.join("index.html").exists());
    assert!(web.join("styles.css").exists());
    assert!(web.join("app.js").exists());
}

#[test]
fn emit_list_does_not_write() {
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .args(["generate", "a landing page for a new app"])
        .assert()
        .success();

    sitesmith()
        .current_dir(temp.path())
        .args(["emit", "pwa", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest.json"));

    assert!(!temp.path().join("dist").exists());
}

#[test]
fn emit_without_a_model_exits_with_user_error() {
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .args(["emit", "web"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("generate"));
}

#[test]
fn dry_run_deploy_reports_a_url() {
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .args(["generate", "an online store for plants"])
        .assert()
        .success();

    sitesmith()
        .current_dir(temp.path())
        .args(["deploy", "netlify", "--project", "plant-shop", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://"));
}

#[test]
fn deploy_without_credentials_exits_with_config_error() {
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .args(["generate", "an online store for plants"])
        .assert()
        .success();

    sitesmith()
        .current_dir(temp.path())
        .env_remove("SITESMITH_NETLIFY_TOKEN")
        .args(["deploy", "netlify", "--project", "plant-shop"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("SITESMITH_NETLIFY_TOKEN"));
}

#[test]
fn dry_run_publish_submits_a_mobile_artifact() {
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .args(["generate", "a recipe collection app"])
        .assert()
        .success();

    sitesmith()
        .current_dir(temp.path())
        .args([
            "publish",
            "play-store",
            "--app-name",
            "Recipes",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted"));
}

#[test]
fn publish_web_target_is_rejected() {
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .args(["generate", "a recipe collection app"])
        .assert()
        .success();

    sitesmith()
        .current_dir(temp.path())
        .args([
            "publish",
            "app-store",
            "--app-name",
            "Recipes",
            "--target",
            "web",
            "--dry-run",
        ])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn free_plan_cannot_use_more_than_its_quota() {
    // One binary invocation seeds a fresh entitlement state, so quota
    // exhaustion inside a single run is covered by the service tests.
    // Here we only verify the plan name is honoured at all.
    let temp = TempDir::new().unwrap();
    sitesmith()
        .current_dir(temp.path())
        .env("SITESMITH_PLAN", "free")
        .args(["generate", "a blog about hiking"])
        .assert()
        .success();
}

#[test]
fn unknown_plan_exits_with_config_error() {
    sitesmith()
        .env("SITESMITH_PLAN", "platinum")
        .args(["classify", "a blog"])
        .assert()
        .failure()
        .code(4);
}
