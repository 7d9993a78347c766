use std::collections::HashMap;

use lens_core::types::{FlatViolation, RuleCount, Severity, ViolationSummary};

/// Roll flattened findings up by severity and by rule.
///
/// A rule keeps the name and severity of its first finding; later findings
/// for the same rule id only add to its count. Rules are ordered by count,
/// descending, with ties left in first-seen order.
pub fn summarize(flat: &[FlatViolation]) -> ViolationSummary {
    let mut summary = ViolationSummary {
        total_violations: flat.len() as u32,
        ..Default::default()
    };
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut by_rule: Vec<RuleCount> = Vec::new();

    for v in flat {
        match v.severity {
            Severity::Error => summary.error_count += 1,
            Severity::Warning => summary.warning_count += 1,
            Severity::Info => summary.info_count += 1,
        }
        match index.get(v.rule_id.as_str()) {
            Some(&i) => by_rule[i].count += 1,
            None => {
                index.insert(&v.rule_id, by_rule.len());
                by_rule.push(RuleCount {
                    rule_id: v.rule_id.clone(),
                    rule_name: v.rule_name.clone(),
                    severity: v.severity,
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable
    by_rule.sort_by(|a, b| b.count.cmp(&a.count));
    summary.by_rule = by_rule;
    summary
}
