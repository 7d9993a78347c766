// Tests for reading violations from a full evaluation response

use lens_core::response::{EvaluationStatus, ViolationInput, ViolationsResponse};
use lens_locate::Report;

use super::common::{PETSTORE_VIOLATIONS, PETSTORE_YAML};

const RESPONSE_JSON: &str = r#"{
  "evaluation": { "status": "ready", "specId": "spec_1", "staleRulesCount": 0 },
  "violations": [
    {
      "key": { "violation_key_type": "http_code", "http_code": "404", "operation_id": "getPet" },
      "value": [ { "rule_id": 17, "message": "404 response has no body", "severity": "error" } ]
    },
    {
      "key": { "violation_key_type": "webhook", "name": "onAdopt" },
      "value": [ { "rule_id": 18, "message": "Webhook is unsupported", "severity": "critical" } ]
    }
  ],
  "ruleIdToSlug": { "17": "response-body" },
  "totalViolations": 2
}"#;

#[test]
fn test_response_input_resolves_slugs_and_positions() {
    let input: ViolationInput = serde_json::from_str(RESPONSE_JSON).unwrap();
    let violations = input.into_violations();
    let report = Report::build("openapi.yaml", PETSTORE_YAML, &violations, true);

    let first = &report.violations[0];
    assert_eq!(first.rule_name, "response-body");
    assert_eq!(first.line, 16);

    // Unknown key types and severities degrade instead of failing.
    let second = &report.violations[1];
    assert_eq!(second.rule_name, "rule-18");
    assert_eq!(second.line, 1);
    assert_eq!(second.key.kind(), "webhook");
    assert_eq!(second.severity, lens_core::types::Severity::Info);
}

#[test]
fn test_response_status() {
    let response: ViolationsResponse = serde_json::from_str(RESPONSE_JSON).unwrap();
    assert_eq!(response.status(), Some(EvaluationStatus::Ready));
    assert!(response.status().is_some_and(|s| s.is_terminal()));
}

#[test]
fn test_bare_list_input() {
    let input: ViolationInput = serde_json::from_str(PETSTORE_VIOLATIONS).unwrap();
    assert_eq!(input.into_violations().len(), 4);
}
