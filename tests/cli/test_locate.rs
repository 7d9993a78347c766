// Tests for `lens locate`

use std::process::Command;

use super::common::{lens_bin, write_files, PETSTORE_YAML};

fn locate_json(args: &[&str]) -> serde_json::Value {
    let (_dir, root) = write_files(&[("openapi.yaml", PETSTORE_YAML)]);
    let out = Command::new(lens_bin())
        .args(["--json", "locate", "openapi.yaml"])
        .args(args)
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn test_locate_operation() {
    let json = locate_json(&["--kind", "operation_id", "--operation-id", "getPet"]);
    assert_eq!(json["line"], 12);
    assert_eq!(json["column"], 6);
    assert_eq!(json["key"]["operation_id"], "getPet");
}

#[test]
fn test_locate_schema_property() {
    let json = locate_json(&[
        "--kind",
        "schema_path",
        "--schema-path",
        "#/components/schemas/Pet",
        "--message",
        "Schema property 'status' contains no enum",
    ]);
    assert_eq!(json["line"], 23);
}

#[test]
fn test_locate_unknown_kind_is_document_start() {
    let json = locate_json(&["--kind", "webhook"]);
    assert_eq!(json["line"], 1);
    assert_eq!(json["column"], 0);
}

#[test]
fn test_locate_human() {
    let (_dir, root) = write_files(&[("openapi.yaml", PETSTORE_YAML)]);
    let out = Command::new(lens_bin())
        .args(["locate", "openapi.yaml", "--kind", "info"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "openapi.yaml:2:1-5 (info)\n");
}
