use serde::{Deserialize, Serialize};

use lens_core::types::{
    FlatViolation, LinePosition, Severity, ViolationKV, ViolationKey, ViolationSummary,
};

use crate::{flatten, locate, summarize};

/// Located findings for one spec file, with their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub project: Option<String>,
    pub violations: Vec<FlatViolation>,
    pub summary: ViolationSummary,
}

impl Report {
    /// Flatten and summarize `violations` against `text`.
    ///
    /// `info` findings are dropped before summarizing unless `include_info` is set.
    pub fn build(file: &str, text: &str, violations: &[ViolationKV], include_info: bool) -> Self {
        let mut flat = flatten(violations, text);
        if !include_info {
            flat.retain(|v| v.severity != Severity::Info);
        }
        let summary = summarize(&flat);
        Self {
            file: file.to_string(),
            project: None,
            violations: flat,
            summary,
        }
    }

    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.summary.error_count > 0
    }
}

/// Result of a single-key lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    pub file: String,
    pub key: ViolationKey,
    pub line: u32,
    pub column: u32,
    pub end_column: u32,
}

impl PositionResult {
    pub fn resolve(file: &str, text: &str, key: ViolationKey, message: Option<&str>) -> Self {
        let LinePosition {
            line,
            column,
            end_column,
        } = locate(&key, text, message);
        Self {
            file: file.to_string(),
            key,
            line,
            column,
            end_column,
        }
    }
}
