use lens_core::types::{FlatViolation, ViolationKV};

use crate::locator::locate;

/// Expand grouped violations into one located record per finding.
///
/// Order is preserved: keys in input order, then findings in their order under
/// each key. Each finding is located with its own message, since findings that
/// share a key can resolve differently (e.g. different schema properties).
pub fn flatten(violations: &[ViolationKV], text: &str) -> Vec<FlatViolation> {
    let mut result = Vec::with_capacity(violations.iter().map(|kv| kv.value.len()).sum());
    for kv in violations {
        for v in &kv.value {
            let pos = locate(&kv.key, text, Some(&v.message));
            result.push(FlatViolation {
                key: kv.key.clone(),
                line: pos.line,
                column: pos.column,
                end_column: pos.end_column,
                rule_id: v.rule_key(),
                rule_name: v.rule_name(),
                message: v.message.clone(),
                severity: v.severity(),
            });
        }
    }
    result
}
