//! Resolve a violation key to a position in the raw spec text.
//!
//! The rule engine works on a parsed document and reports findings by semantic
//! identity (operation id, schema pointer, status code, ...), so the location is
//! re-derived here by pattern matching against the original text. The result
//! is best-effort: ambiguous documents resolve to the first match in probe
//! order, and anything unmatched resolves to the document start.

pub mod probe;
pub mod span;
pub mod strategy;

use lens_core::types::{LinePosition, ViolationKey};
use tracing::debug;

pub use probe::Probe;
pub use span::{Span, Window};

/// Locate `key` in `text`. `message` is the violation's message, which some
/// strategies use to narrow the search (schema properties, underscore paths).
///
/// Never fails: an unmatched key yields line 1, column 0, spanning the first line.
pub fn locate(key: &ViolationKey, text: &str, message: Option<&str>) -> LinePosition {
    match find_span(key, text, message) {
        Some(span) => span.to_position(text),
        None => {
            debug!(kind = key.kind(), "no match, using document start");
            LinePosition::document_start(text)
        }
    }
}

/// The matched span for `key`, if any strategy found one.
pub fn find_span(key: &ViolationKey, text: &str, message: Option<&str>) -> Option<Span> {
    match key {
        ViolationKey::OperationId { operation_id, path } => {
            strategy::find_operation(text, operation_id.as_deref(), path.as_deref())
        }
        ViolationKey::Path { path } => strategy::find_path(text, path.as_deref(), message),
        ViolationKey::SchemaPath { schema_path } => {
            strategy::find_schema(text, schema_path.as_deref(), message)
        }
        ViolationKey::HttpCode {
            http_code,
            operation_id,
            path,
        } => strategy::find_http_code(
            text,
            http_code.as_deref(),
            operation_id.as_deref(),
            path.as_deref(),
        ),
        ViolationKey::Tag { tag } => strategy::find_tag(text, tag.as_deref()),
        ViolationKey::Info => strategy::find_info(text),
        ViolationKey::System | ViolationKey::Unknown(_) => None,
    }
}
