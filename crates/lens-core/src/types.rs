use serde::{Deserialize, Serialize};

/// Severity reported by the rule engine.
///
/// Unrecognized severities deserialize as [`Severity::Info`], which is the
/// catch-all bucket when counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Warning,
    Error,
    #[serde(other)]
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies which element of an OpenAPI document a violation concerns.
///
/// Each variant carries only the fields its location strategy reads. The
/// evaluation service sends keys as a flat record tagged by
/// `violation_key_type`; see [`RawViolationKey`] for the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawViolationKey", into = "RawViolationKey")]
pub enum ViolationKey {
    /// An operation, optionally with the path it lives under.
    OperationId {
        operation_id: Option<String>,
        path: Option<String>,
    },
    /// A path template under `paths`.
    Path { path: Option<String> },
    /// A slash-delimited pointer such as `#/components/schemas/Pet`.
    SchemaPath { schema_path: Option<String> },
    /// A response status code, with its enclosing operation for fallback.
    HttpCode {
        http_code: Option<String>,
        operation_id: Option<String>,
        path: Option<String>,
    },
    Tag { tag: Option<String> },
    Info,
    /// Document-wide finding with no specific element.
    System,
    /// A key type this version does not know how to locate.
    Unknown(String),
}

impl ViolationKey {
    pub fn operation(operation_id: impl Into<String>) -> Self {
        ViolationKey::OperationId {
            operation_id: Some(operation_id.into()),
            path: None,
        }
    }

    pub fn path(path: impl Into<String>) -> Self {
        ViolationKey::Path {
            path: Some(path.into()),
        }
    }

    pub fn schema(schema_path: impl Into<String>) -> Self {
        ViolationKey::SchemaPath {
            schema_path: Some(schema_path.into()),
        }
    }

    pub fn http_code(http_code: impl Into<String>) -> Self {
        ViolationKey::HttpCode {
            http_code: Some(http_code.into()),
            operation_id: None,
            path: None,
        }
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        ViolationKey::Tag {
            tag: Some(tag.into()),
        }
    }

    /// The `violation_key_type` tag used on the wire.
    pub fn kind(&self) -> &str {
        match self {
            ViolationKey::OperationId { .. } => "operation_id",
            ViolationKey::Path { .. } => "path",
            ViolationKey::SchemaPath { .. } => "schema_path",
            ViolationKey::HttpCode { .. } => "http_code",
            ViolationKey::Tag { .. } => "tag",
            ViolationKey::Info => "info",
            ViolationKey::System => "system",
            ViolationKey::Unknown(kind) => kind,
        }
    }

    /// Short human label, e.g. `operation getPet` or `schema #/definitions/Pet`.
    pub fn label(&self) -> String {
        fn or_dash(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("-")
        }
        match self {
            ViolationKey::OperationId { operation_id, path } => match operation_id {
                Some(id) => format!("operation {}", id),
                None => format!("path {}", or_dash(path)),
            },
            ViolationKey::Path { path } => format!("path {}", or_dash(path)),
            ViolationKey::SchemaPath { schema_path } => format!("schema {}", or_dash(schema_path)),
            ViolationKey::HttpCode { http_code, .. } => format!("response {}", or_dash(http_code)),
            ViolationKey::Tag { tag } => format!("tag {}", or_dash(tag)),
            ViolationKey::Info => "info".to_string(),
            ViolationKey::System => "document".to_string(),
            ViolationKey::Unknown(kind) => kind.clone(),
        }
    }
}

/// Flat wire representation of a [`ViolationKey`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawViolationKey {
    pub violation_key_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl From<RawViolationKey> for ViolationKey {
    fn from(raw: RawViolationKey) -> Self {
        match raw.violation_key_type.as_str() {
            "operation_id" => ViolationKey::OperationId {
                operation_id: raw.operation_id,
                path: raw.path,
            },
            "path" => ViolationKey::Path { path: raw.path },
            "schema_path" => ViolationKey::SchemaPath {
                schema_path: raw.schema_path,
            },
            "http_code" => ViolationKey::HttpCode {
                http_code: raw.http_code,
                operation_id: raw.operation_id,
                path: raw.path,
            },
            "tag" => ViolationKey::Tag { tag: raw.tag },
            "info" => ViolationKey::Info,
            "system" => ViolationKey::System,
            _ => ViolationKey::Unknown(raw.violation_key_type),
        }
    }
}

impl From<ViolationKey> for RawViolationKey {
    fn from(key: ViolationKey) -> Self {
        let mut raw = RawViolationKey {
            violation_key_type: key.kind().to_string(),
            ..Default::default()
        };
        match key {
            ViolationKey::OperationId { operation_id, path } => {
                raw.operation_id = operation_id;
                raw.path = path;
            }
            ViolationKey::Path { path } => raw.path = path,
            ViolationKey::SchemaPath { schema_path } => raw.schema_path = schema_path,
            ViolationKey::HttpCode {
                http_code,
                operation_id,
                path,
            } => {
                raw.http_code = http_code;
                raw.operation_id = operation_id;
                raw.path = path;
            }
            ViolationKey::Tag { tag } => raw.tag = tag,
            ViolationKey::Info | ViolationKey::System | ViolationKey::Unknown(_) => {}
        }
        raw
    }
}

/// One rule finding from the evaluation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: u64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_slug: Option<String>,
}

impl Violation {
    pub fn severity(&self) -> Severity {
        self.severity.unwrap_or_default()
    }

    /// Stable identifier: the slug when known, otherwise the numeric id.
    pub fn rule_key(&self) -> String {
        match &self.rule_slug {
            Some(slug) => slug.clone(),
            None => self.rule_id.to_string(),
        }
    }

    /// Display name: the slug when known, otherwise `rule-<id>`.
    pub fn rule_name(&self) -> String {
        match &self.rule_slug {
            Some(slug) => slug.clone(),
            None => format!("rule-{}", self.rule_id),
        }
    }
}

/// A key with every rule finding reported against it, in service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationKV {
    pub key: ViolationKey,
    pub value: Vec<Violation>,
}

/// A resolved location. `line` is 1-indexed, columns are 0-indexed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinePosition {
    pub line: u32,
    pub column: u32,
    pub end_column: u32,
}

impl LinePosition {
    /// Position used when nothing more specific can be found: the whole first line.
    pub fn document_start(text: &str) -> Self {
        let first = text.split('\n').next().unwrap_or("");
        Self {
            line: 1,
            column: 0,
            end_column: first.chars().count() as u32,
        }
    }
}

/// One rule finding with its resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatViolation {
    pub key: ViolationKey,
    pub line: u32,
    pub column: u32,
    pub end_column: u32,
    pub rule_id: String,
    pub rule_name: String,
    pub message: String,
    pub severity: Severity,
}

impl FlatViolation {
    pub fn position(&self) -> LinePosition {
        LinePosition {
            line: self.line,
            column: self.column,
            end_column: self.end_column,
        }
    }
}

/// Per-rule row of a [`ViolationSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCount {
    pub rule_id: String,
    pub rule_name: String,
    pub severity: Severity,
    pub count: u32,
}

/// Counts by severity and by rule; `by_rule` is sorted by count, descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationSummary {
    pub total_violations: u32,
    pub error_count: u32,
    pub warning_count: u32,
    pub info_count: u32,
    pub by_rule: Vec<RuleCount>,
}
