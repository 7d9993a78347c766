//! Output formatters for lens results.
//!
//! Provides three output modes:
//! - **Human** (default): rustc-style blocks with a per-rule summary table
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Compact** (`--compact`): One line per finding, for CI logs and grep
//!
//! The text modes print `file:line:col` with 1-based columns, as compilers do.
//! JSON keeps the 0-based columns of [`lens_core::types::LinePosition`].

pub mod compact;
pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use lens_core::types::ViolationSummary;
use lens_locate::{PositionResult, Report};

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> String;
    fn format_summary(&self, summary: &ViolationSummary) -> String;
    fn format_position(&self, result: &PositionResult) -> String;
}
