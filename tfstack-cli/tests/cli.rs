//! Tests for `resolve`, `merge`, `completions` and global flags.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();

    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();

    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_resolve_yaml() {
    let env = TestEnv::with_fixtures();

    let output = env
        .command()
        .arg("resolve")
        .arg("--config-dir")
        .arg(env.config_dir())
        .arg("--component")
        .arg("web")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(value["component"].as_str(), Some("web"));
    assert_eq!(value["account"].as_str(), Some("prod"));
    assert_eq!(value["provider"]["TF_VERSION"].as_str(), Some(">= 1.5"));
    assert_eq!(value["provider"]["AWS_provider_version"].as_str(), Some("~> 5.0"));
    assert!(value["provider"]["session_name"].is_null());
    assert_eq!(
        value["backend"]["key"].as_str(),
        Some("prod/web/terraform.tfstate")
    );
}

#[test]
fn test_resolve_json_detected_component() {
    let env = TestEnv::with_fixtures();
    let nested = env.create_dir("components/web/nested");

    let output = env
        .command()
        .current_dir(&nested)
        .arg("resolve")
        .arg("--config-dir")
        .arg(env.config_dir())
        .arg("--component-dir")
        .arg(env.component_dir())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["module"], "web");
    assert_eq!(value["backend"]["bucket"], "state-bucket");
    assert_eq!(value["provider"]["region"], "us-east-1");
}

#[test]
fn test_merge_paths_in_order() {
    let env = TestEnv::new();
    env.write("base/app.yaml", "app:\n  replicas: 1\n  zones: [a]\n");
    env.write("base/vpn-keys.yaml", "secret: hidden\n");
    env.write("prod/app.yml", "app:\n  replicas: 3\n  zones: [b]\n");

    let output = env
        .command()
        .arg("merge")
        .arg(env.path().join("base"))
        .arg(env.path().join("prod"))
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["app"]["replicas"], 3);
    assert_eq!(value["app"]["zones"], serde_json::json!(["a", "b"]));
    assert!(value.get("secret").is_none());
    assert_eq!(value["__config_paths__"].as_array().unwrap().len(), 2);
}

#[test]
fn test_merge_ignore_flag() {
    let env = TestEnv::new();
    env.write("config/app.yaml", "app: 1\n");
    env.write("config/local.yaml", "local: 1\n");

    env.command()
        .arg("merge")
        .arg("--ignore")
        .arg("local.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("app: 1"))
        .stdout(predicate::str::contains("local").not());
}

#[test]
fn test_merge_uses_config_paths_env() {
    let env = TestEnv::new();
    env.write("one/x.yaml", "value: one\n");
    env.write("two/x.yaml", "value: two\n");
    let list = std::env::join_paths([env.path().join("one"), env.path().join("two")]).unwrap();

    env.command()
        .arg("merge")
        .env("CONFIG_PATHS", list)
        .assert()
        .success()
        .stdout(predicate::str::contains("value: two"));
}

#[test]
fn test_merge_missing_default_root() {
    let env = TestEnv::new();

    env.command().arg("merge").assert().failure().code(3);
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("tfstack"));
}
