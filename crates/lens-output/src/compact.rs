use crate::human_helpers::format_counts_line;
use crate::OutputFormatter;
use lens_core::types::{FlatViolation, Severity, ViolationSummary};
use lens_locate::{PositionResult, Report};

/// One line per finding, errors first.
pub struct CompactFormatter;

/// Sort priority, lower first.
pub fn severity_priority(severity: Severity) -> u32 {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    }
}

/// Errors first, then by line.
pub fn sort_by_priority(violations: &mut [&FlatViolation]) {
    violations.sort_by_key(|v| (severity_priority(v.severity), v.line));
}

pub fn format_violation_compact(file: &str, v: &FlatViolation) -> String {
    format!(
        "{}:{}:{}: {} {} {}\n",
        file,
        v.line,
        v.column + 1,
        v.severity,
        v.rule_name,
        v.message,
    )
}

impl OutputFormatter for CompactFormatter {
    fn format_report(&self, report: &Report) -> String {
        if report.violations.is_empty() {
            return String::new();
        }

        let mut sorted: Vec<&FlatViolation> = report.violations.iter().collect();
        sort_by_priority(&mut sorted);

        let mut out = String::new();
        for v in sorted {
            out.push_str(&format_violation_compact(&report.file, v));
        }
        out.push_str(&format!("{}\n", format_counts_line(&report.summary)));
        out
    }

    fn format_summary(&self, summary: &ViolationSummary) -> String {
        let mut out = format!(
            "TOTAL {} {}\n",
            summary.total_violations,
            format_counts_line(summary)
        );
        for rule in &summary.by_rule {
            out.push_str(&format!(
                "RULE {} {} {}\n",
                rule.rule_name, rule.severity, rule.count
            ));
        }
        out
    }

    fn format_position(&self, result: &PositionResult) -> String {
        format!(
            "{}:{}:{}-{}\n",
            result.file,
            result.line,
            result.column + 1,
            result.end_column
        )
    }
}
