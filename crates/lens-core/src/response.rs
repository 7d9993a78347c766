//! Response envelope returned by the evaluation service.
//!
//! Only the parts lens consumes are modelled; unknown fields are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ViolationKV;

/// Evaluation lifecycle as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Ready,
    Evaluating,
    Error,
    Partial,
    Stale,
    Pending,
    InProgress,
    Failed,
}

impl EvaluationStatus {
    /// Whether polling can stop: no further results will arrive for this spec.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EvaluationStatus::Ready
                | EvaluationStatus::Error
                | EvaluationStatus::Partial
                | EvaluationStatus::Stale
                | EvaluationStatus::Failed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub status: EvaluationStatus,
    pub spec_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stale_rules_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EvaluationStatus>,
    #[serde(default)]
    pub violations: Vec<ViolationKV>,
    /// JSON object keys are strings, so rule ids arrive as `"12"`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rule_id_to_slug: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_violations: Option<u32>,
}

impl ViolationsResponse {
    /// Effective status: the evaluation block wins over the top-level field.
    pub fn status(&self) -> Option<EvaluationStatus> {
        self.evaluation.as_ref().map(|e| e.status).or(self.status)
    }

    /// Fill in `rule_slug` from the response's slug table wherever a violation lacks one.
    pub fn apply_rule_slugs(&mut self) {
        if self.rule_id_to_slug.is_empty() {
            return;
        }
        for kv in &mut self.violations {
            for v in &mut kv.value {
                if v.rule_slug.is_none() {
                    v.rule_slug = self.rule_id_to_slug.get(&v.rule_id.to_string()).cloned();
                }
            }
        }
    }
}

/// Violations as accepted from a file: a bare list or a full service response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ViolationInput {
    List(Vec<ViolationKV>),
    Response(ViolationsResponse),
}

impl ViolationInput {
    /// Evaluation status carried by a full response; a bare list has none.
    pub fn status(&self) -> Option<EvaluationStatus> {
        match self {
            ViolationInput::List(_) => None,
            ViolationInput::Response(response) => response.status(),
        }
    }

    pub fn into_violations(self) -> Vec<ViolationKV> {
        match self {
            ViolationInput::List(list) => list,
            ViolationInput::Response(mut response) => {
                response.apply_rule_slugs();
                response.violations
            }
        }
    }
}
