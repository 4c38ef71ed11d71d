use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use dacg_catalog::config::Config;
use dacg_catalog::loader::OnParseError;

const ONE_NPM: &str = r#"{
  "dacg": {
    "npm": { "checker_meta_data": [
      { "library": "left-pad", "versionInterval": "<1.3.0", "vulnerability": "proto-pollution", "id": "NPM-001" }
    ] },
    "wp": { "checker_meta_data": [] },
    "iis": { "checker_meta_data": [] },
    "technote": { "checker_meta_data": [] },
    "zeroboard": { "checker_meta_data": [] }
  }
}"#;

fn dacg(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dacg"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn project_with_resources() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("dacg")).unwrap();
    fs::write(dir.path().join("dacg/one.json"), ONE_NPM).unwrap();
    fs::write(dir.path().join("dacg/broken.json"), "{ \"dacg\": {} }").unwrap();
    fs::write(
        dir.path().join(".dacg.toml"),
        "[catalog]\nresource_root = \"dacg\"\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_lookup_json_is_case_insensitive() {
    let dir = project_with_resources();
    let out = dacg(dir.path(), &["lookup", "npm-001", "--format", "json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "NPM-001");
    assert_eq!(records[0]["category"], "npm");
    assert_eq!(records[0]["library"], "left-pad");
}

#[test]
fn test_lookup_without_match_exits_nonzero() {
    let dir = project_with_resources();
    let out = dacg(dir.path(), &["lookup", "NPM-002", "--no-color"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("No checker matched"));
}

#[test]
fn test_list_report_shows_skipped_resource() {
    let dir = project_with_resources();
    let out = dacg(dir.path(), &["list", "--report", "--format", "json"]);
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["checkers"].as_array().unwrap().len(), 1);
    assert_eq!(value["report"]["skipped"][0]["name"], "broken.json");
}

#[test]
fn test_list_defaults_to_bundled_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let out = dacg(dir.path(), &["list", "--no-color"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("DACG.NPM.LODASH_PROTOTYPE_POLLUTION"));
}

#[test]
fn test_init_writes_loadable_config() {
    let dir = tempfile::tempdir().unwrap();
    let out = dacg(dir.path(), &["init"]);
    assert!(out.status.success());

    let config = Config::load(&dir.path().join(".dacg.toml")).unwrap();
    assert!(config.catalog.resource_root.is_none());
    assert_eq!(config.catalog.on_parse_error, OnParseError::SkipFile);
}

#[test]
fn test_config_selects_abort_policy() {
    let toml_str = r#"
[catalog]
on_parse_error = "abort"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.loader().policy(), OnParseError::Abort);
}
