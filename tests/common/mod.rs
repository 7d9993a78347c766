/// Shared test helpers for all lens integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Petstore document in YAML. Landmarks: `getPet` on line 12, `/pet_status`
/// on line 8, schema `Pet` on line 20 with property `status` on line 23.
#[allow(dead_code)]
pub const PETSTORE_YAML: &str = "\
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
tags:
  - name: pets
paths:
  /pet_status:
    get:
      tags:
        - pets
      operationId: getPet
      responses:
        '200':
          description: ok
        '404':
          description: missing
components:
  schemas:
    Pet:
      type: object
      properties:
        status:
          type: string
    Error:
      type: object
      properties:
        code:
          type: integer
";

/// The same API in JSON. Landmarks: `info` on line 3, tag `pets` on line 8,
/// `/pet_status` on line 11, `getPet` on line 13, `Pet` on line 22, `status`
/// on line 25.
#[allow(dead_code)]
pub const PETSTORE_JSON: &str = r#"{
  "openapi": "3.0.3",
  "info": {
    "title": "Petstore",
    "version": "1.0.0"
  },
  "tags": [
    { "name": "pets" }
  ],
  "paths": {
    "/pet_status": {
      "get": {
        "operationId": "getPet",
        "responses": {
          "200": { "description": "ok" }
        }
      }
    }
  },
  "components": {
    "schemas": {
      "Pet": {
        "type": "object",
        "properties": {
          "status": { "type": "string" }
        }
      }
    }
  }
}
"#;

/// Grouped violations against [`PETSTORE_YAML`]: five findings under four keys.
#[allow(dead_code)]
pub const PETSTORE_VIOLATIONS: &str = r##"[
  {
    "key": { "violation_key_type": "operation_id", "operation_id": "getPet" },
    "value": [
      { "rule_id": 1, "message": "Operation is missing a summary", "severity": "warning", "rule_slug": "operation-summary" },
      { "rule_id": 2, "message": "Operation must declare a 500 response", "severity": "error", "rule_slug": "server-error-response" }
    ]
  },
  {
    "key": { "violation_key_type": "path", "path": "/pet-status" },
    "value": [
      { "rule_id": 3, "message": "Path segment contains underscore", "severity": "error", "rule_slug": "no-underscores" }
    ]
  },
  {
    "key": { "violation_key_type": "schema_path", "schema_path": "#/components/schemas/Pet" },
    "value": [
      { "rule_id": 4, "message": "Schema property 'status' contains no enum", "rule_slug": "enum-status" }
    ]
  },
  {
    "key": { "violation_key_type": "info" },
    "value": [
      { "rule_id": 5, "message": "Info is missing a contact", "severity": "info", "rule_slug": "info-contact" }
    ]
  }
]"##;

/// Get path to compiled lens binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn lens_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("lens");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let status = Command::new("cargo")
        .args(["build", "-p", "lens-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build lens");
    assert!(status.success(), "Failed to build lens binary");
    path
}

/// Write a set of files into a fresh temp directory.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Returns (TempDir, root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn write_files(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }
    (dir, root)
}

/// Parse [`PETSTORE_VIOLATIONS`].
#[allow(dead_code)]
pub fn petstore_violations() -> Vec<lens_core::types::ViolationKV> {
    serde_json::from_str(PETSTORE_VIOLATIONS).expect("fixture violations parse")
}
