//! Per-key-type search strategies.
//!
//! Strategies work on the raw text, never on a parsed document, so they
//! tolerate YAML and JSON alike. Each returns `None` when nothing matched.

use once_cell::sync::Lazy;
use regex::Regex;

use super::probe::{first_hit, Probe};
use super::span::{Span, Window};

static YAML_PATHS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^paths:\s*$").unwrap());
static JSON_PATHS: Lazy<Regex> = Lazy::new(|| Regex::new(r#""paths"\s*:\s*\{"#).unwrap());
/// A top-level YAML key at column 0.
static TOP_LEVEL_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[a-zA-Z][a-zA-Z0-9]*:").unwrap());
/// A capitalized key at two-space indent, i.e. the next sibling schema.
static NEXT_SCHEMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n {2}[A-Z][a-zA-Z0-9]*:").unwrap());
static SCHEMA_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Schema property '([^']+)'").unwrap());

/// The `paths` section: from its key to the next top-level YAML key or end of text.
///
/// JSON documents have no column-0 keys after the opening brace, so their
/// window always runs to the end of the text.
pub fn paths_window(text: &str) -> Option<Window> {
    let start = YAML_PATHS
        .find(text)
        .or_else(|| JSON_PATHS.find(text))?
        .start();
    let end = TOP_LEVEL_KEY
        .find(&text[start..])
        .map(|m| start + m.start())
        .unwrap_or(text.len());
    Some(Window { start, end })
}

/// From a schema's key to the next two-space-indented capitalized key or end of text.
pub fn schema_window(text: &str, schema_start: usize) -> Window {
    let end = text
        .get(schema_start..)
        .and_then(|rest| NEXT_SCHEMA.find(rest))
        .map(|m| schema_start + m.start())
        .unwrap_or(text.len());
    Window {
        start: schema_start,
        end,
    }
}

pub fn operation_probes(operation_id: &str) -> Vec<Probe> {
    vec![
        Probe::literal(format!("operationId: {}", operation_id)),
        Probe::literal(format!("operationId: \"{}\"", operation_id)),
        Probe::literal(format!("operationId: '{}'", operation_id)),
        Probe::literal(format!("\"operationId\": \"{}\"", operation_id)),
    ]
}

fn mentions_underscore(message: Option<&str>) -> bool {
    message.is_some_and(|m| m.to_lowercase().contains("underscore"))
}

/// Probes for a path key, in priority order: exact key forms, the underscore
/// fallback when the message asks for it, a path starting with one of the
/// literal segments, then a path containing one anywhere.
pub fn path_probes(path: Option<&str>, message: Option<&str>) -> Vec<Probe> {
    let mut probes = Vec::new();
    if let Some(path) = path {
        probes.push(Probe::line_start(format!("  {}:", path)));
        probes.push(Probe::line_start(format!("    {}:", path)));
        probes.push(Probe::literal(format!("\"{}\":", path)));
        probes.push(Probe::literal(format!("'{}':", path)));
    }
    if mentions_underscore(message) {
        probes.push(Probe::UnderscorePath);
    }
    if let Some(path) = path {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|s| !s.is_empty() && !s.starts_with('{'))
            .collect();
        probes.extend(segments.iter().map(|s| Probe::LeadingSegment(s.to_string())));
        probes.extend(segments.iter().map(|s| Probe::PathSegment(s.to_string())));
    }
    probes
}

pub fn tag_probes(tag: &str) -> Vec<Probe> {
    vec![
        Probe::literal(format!("- {}", tag)),
        Probe::literal(format!("- \"{}\"", tag)),
        Probe::literal(format!("- '{}'", tag)),
        Probe::literal(format!("name: {}", tag)),
        Probe::literal(format!("name: \"{}\"", tag)),
        Probe::literal(format!("name: '{}'", tag)),
        Probe::literal(format!("\"name\": \"{}\"", tag)),
    ]
}

pub fn http_code_probes(code: &str) -> Vec<Probe> {
    vec![
        Probe::literal(format!("{}:", code)),
        Probe::literal(format!("\"{}\":", code)),
        Probe::literal(format!("'{}':", code)),
    ]
}

/// Last `/`-separated component of a schema pointer, with a leading `#/` removed.
pub fn schema_name(schema_path: &str) -> &str {
    let trimmed = schema_path.strip_prefix("#/").unwrap_or(schema_path);
    match trimmed.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => schema_path,
    }
}

/// Property named by messages like `Schema property 'petStatus' contains ...`.
pub fn property_name(message: &str) -> Option<&str> {
    SCHEMA_PROPERTY
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn key_probes(name: &str) -> [Probe; 2] {
    [
        Probe::literal(format!("{}:", name)),
        Probe::literal(format!("\"{}\":", name)),
    ]
}

pub fn find_operation(text: &str, operation_id: Option<&str>, path: Option<&str>) -> Option<Span> {
    if let Some(id) = operation_id {
        if let Some(span) = first_hit(&operation_probes(id), text, Window::whole(text)) {
            return Some(span);
        }
    }
    find_path(text, Some(path?), None)
}

pub fn find_path(text: &str, path: Option<&str>, message: Option<&str>) -> Option<Span> {
    let window = paths_window(text)?;
    first_hit(&path_probes(path, message), text, window)
}

pub fn find_schema(text: &str, schema_path: Option<&str>, message: Option<&str>) -> Option<Span> {
    let name = schema_name(schema_path?);
    let schema = first_hit(&key_probes(name), text, Window::whole(text))?;

    if let Some(property) = message.and_then(property_name) {
        let window = schema_window(text, schema.offset);
        if let Some(span) = first_hit(&key_probes(property), text, window) {
            return Some(span);
        }
    }
    Some(schema)
}

pub fn find_http_code(
    text: &str,
    http_code: Option<&str>,
    operation_id: Option<&str>,
    path: Option<&str>,
) -> Option<Span> {
    let code = http_code?;
    first_hit(&http_code_probes(code), text, Window::whole(text))
        .or_else(|| find_operation(text, operation_id, path))
}

pub fn find_tag(text: &str, tag: Option<&str>) -> Option<Span> {
    first_hit(&tag_probes(tag?), text, Window::whole(text))
}

pub fn find_info(text: &str) -> Option<Span> {
    first_hit(
        &[Probe::literal("info:"), Probe::literal("\"info\":")],
        text,
        Window::whole(text),
    )
}
