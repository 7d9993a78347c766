use lens_core::types::{FlatViolation, ViolationSummary};

pub(crate) fn format_violation_human(v: &FlatViolation, file: &str) -> String {
    let mut out = format!(
        "{}[{}]: {}\n  --> {}:{}:{}\n",
        v.severity,
        v.rule_name,
        v.message,
        file,
        v.line,
        v.column + 1,
    );
    out.push_str(&format!("   = at: {}\n", v.key.label()));
    if v.rule_id != v.rule_name {
        out.push_str(&format!("   = rule id: {}\n", v.rule_id));
    }
    out
}

pub(crate) fn format_counts_line(summary: &ViolationSummary) -> String {
    format!(
        "{} error(s), {} warning(s), {} info",
        summary.error_count, summary.warning_count, summary.info_count,
    )
}

/// Per-rule table in `by_rule` order, counts right-aligned.
pub(crate) fn format_rule_table(summary: &ViolationSummary) -> String {
    let width = summary
        .by_rule
        .iter()
        .map(|r| r.count.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for rule in &summary.by_rule {
        out.push_str(&format!(
            "  {:>width$}  {:<7}  {}\n",
            rule.count,
            rule.severity.as_str(),
            rule.rule_name,
            width = width,
        ));
    }
    out
}
