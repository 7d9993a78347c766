use crate::human_helpers::{format_counts_line, format_rule_table, format_violation_human};
use crate::OutputFormatter;
use lens_core::types::ViolationSummary;
use lens_locate::{PositionResult, Report};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &Report) -> String {
        if report.violations.is_empty() {
            return "No violations found.\n".to_string();
        }

        let mut out = String::new();
        if let Some(project) = &report.project {
            out.push_str(&format!("Project: {}\n\n", project));
        }

        for v in &report.violations {
            out.push_str(&format_violation_human(v, &report.file));
        }

        out.push_str(&format!(
            "\n{} in {}\n",
            format_counts_line(&report.summary),
            report.file,
        ));
        out.push_str(&format_rule_table(&report.summary));
        out
    }

    fn format_summary(&self, summary: &ViolationSummary) -> String {
        let mut out = format!(
            "{} violation(s): {}\n",
            summary.total_violations,
            format_counts_line(summary),
        );
        out.push_str(&format_rule_table(summary));
        out
    }

    fn format_position(&self, result: &PositionResult) -> String {
        format!(
            "{}:{}:{}-{} ({})\n",
            result.file,
            result.line,
            result.column + 1,
            result.end_column,
            result.key.label(),
        )
    }
}
