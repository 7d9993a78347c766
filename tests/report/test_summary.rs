// Tests for summarizing located findings

use lens_core::types::Severity;
use lens_locate::{flatten, summarize, Report};

use super::common::{petstore_violations, PETSTORE_YAML};

#[test]
fn test_summary_of_fixture() {
    let flat = flatten(&petstore_violations(), PETSTORE_YAML);
    let summary = summarize(&flat);
    assert_eq!(summary.total_violations, 5);
    assert_eq!(summary.error_count, 2);
    assert_eq!(summary.warning_count, 2);
    assert_eq!(summary.info_count, 1);
    let by_rule: u32 = summary.by_rule.iter().map(|r| r.count).sum();
    assert_eq!(by_rule, summary.total_violations);
    // All counts tie, so encounter order is kept.
    assert_eq!(summary.by_rule[0].rule_id, "operation-summary");
    assert_eq!(summary.by_rule[4].rule_id, "info-contact");
}

#[test]
fn test_report_excludes_info_unless_asked() {
    let violations = petstore_violations();
    let report = Report::build("openapi.yaml", PETSTORE_YAML, &violations, false);
    assert_eq!(report.summary.total_violations, 4);
    assert!(report
        .violations
        .iter()
        .all(|v| v.severity != Severity::Info));

    let report = Report::build("openapi.yaml", PETSTORE_YAML, &violations, true);
    assert_eq!(report.summary.total_violations, 5);
    assert!(report.has_errors());
}
