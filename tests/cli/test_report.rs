// Tests for `lens report`

use std::process::Command;

use super::common::{lens_bin, write_files, PETSTORE_VIOLATIONS, PETSTORE_YAML};

#[test]
fn test_report_json_output() {
    let (_dir, root) = write_files(&[
        ("openapi.yaml", PETSTORE_YAML),
        ("violations.json", PETSTORE_VIOLATIONS),
    ]);
    let out = Command::new(lens_bin())
        .args(["--json", "report", "openapi.yaml", "violations.json"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["file"], "openapi.yaml");
    assert_eq!(json["summary"]["total_violations"], 4);
    assert_eq!(json["violations"][2]["line"], 8);
    assert!(json.get("project").is_none());
}

#[test]
fn test_report_human_is_default() {
    let (_dir, root) = write_files(&[
        ("openapi.yaml", PETSTORE_YAML),
        ("violations.json", PETSTORE_VIOLATIONS),
    ]);
    let out = Command::new(lens_bin())
        .args(["report", "openapi.yaml", "violations.json", "--include-info"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("warning[operation-summary]"));
    assert!(stdout.contains("--> openapi.yaml:12:7"));
    assert!(stdout.contains("info[info-contact]"));
}

#[test]
fn test_report_reads_workspace_config() {
    let (_dir, root) = write_files(&[
        ("specs/openapi.yaml", PETSTORE_YAML),
        ("specs/.restlens.json", r#"{"organization":"acme","project":"pets","includeInfoSeverity":true}"#),
        ("violations.json", PETSTORE_VIOLATIONS),
    ]);
    let out = Command::new(lens_bin())
        .args(["--json", "report", "specs/openapi.yaml", "violations.json"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["project"], "acme/pets");
    assert_eq!(json["summary"]["info_count"], 1);
}

#[test]
fn test_report_compact() {
    let (_dir, root) = write_files(&[
        ("openapi.yaml", PETSTORE_YAML),
        ("violations.json", PETSTORE_VIOLATIONS),
    ]);
    let out = Command::new(lens_bin())
        .args(["report", "openapi.yaml", "violations.json", "--compact"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let first = stdout.lines().next().unwrap_or_default();
    assert_eq!(
        first,
        "openapi.yaml:8:3: error no-underscores Path segment contains underscore"
    );
}

#[test]
fn test_report_warns_on_unfinished_evaluation() {
    let response = r#"{
  "evaluation": { "status": "evaluating", "specId": "spec_1" },
  "violations": [
    {
      "key": { "violation_key_type": "info" },
      "value": [ { "rule_id": 5, "message": "Info is missing a contact", "severity": "error" } ]
    }
  ]
}"#;
    let (_dir, root) = write_files(&[
        ("openapi.yaml", PETSTORE_YAML),
        ("violations.json", response),
    ]);
    let out = Command::new(lens_bin())
        .args(["--compact", "report", "openapi.yaml", "violations.json"])
        .env_remove("LENS_LOG")
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("evaluation still in progress"), "stderr: {}", stderr);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("openapi.yaml:2:1: error rule-5"));
}
