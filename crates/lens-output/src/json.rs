use crate::OutputFormatter;
use lens_core::types::ViolationSummary;
use lens_locate::{PositionResult, Report};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
    fn format_summary(&self, summary: &ViolationSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_default()
    }
    fn format_position(&self, result: &PositionResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
