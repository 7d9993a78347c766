//! Ordered search probes.
//!
//! Each strategy is expressed as a list of probes tried in order; the first
//! probe that matches anywhere in its window wins, regardless of where the
//! match sits relative to later probes' matches.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::span::{Span, Window};

/// An indented path key: `  /pets:`, `    "/pets/{id}":`, `  '/a_b':`.
static PATH_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]+(?P<key>["']?(?P<path>/[^\s"':]*)["']?:)"#).unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Exact substring. The first `skip` bytes of the needle are matched but
    /// excluded from the reported span (used for leading newlines).
    Literal { needle: String, skip: usize },
    /// First path key whose path contains an underscore.
    UnderscorePath,
    /// First path key whose first `/`-separated segment is `segment`.
    LeadingSegment(String),
    /// First path key with `segment` as one of its `/`-separated segments.
    PathSegment(String),
}

impl Probe {
    pub fn literal(needle: impl Into<String>) -> Self {
        Probe::Literal {
            needle: needle.into(),
            skip: 0,
        }
    }

    /// A needle that must start at the beginning of a line.
    pub fn line_start(needle: impl AsRef<str>) -> Self {
        Probe::Literal {
            needle: format!("\n{}", needle.as_ref()),
            skip: 1,
        }
    }

    /// Search `haystack`; the returned span is relative to it.
    pub fn find(&self, haystack: &str) -> Option<Span> {
        match self {
            Probe::Literal { needle, skip } => haystack
                .find(needle.as_str())
                .map(|idx| Span::new(idx + skip, needle.len() - skip)),
            Probe::UnderscorePath => find_path_key(haystack, |path| path.contains('_')),
            Probe::LeadingSegment(segment) => find_path_key(haystack, |path| {
                path.split('/').nth(1).is_some_and(|first| first == segment)
            }),
            Probe::PathSegment(segment) => {
                find_path_key(haystack, |path| path.split('/').any(|s| s == segment))
            }
        }
    }
}

fn find_path_key(haystack: &str, accept: impl Fn(&str) -> bool) -> Option<Span> {
    PATH_KEY.captures_iter(haystack).find_map(|caps| {
        let path = caps.name("path")?;
        if !accept(path.as_str()) {
            return None;
        }
        let key = caps.name("key")?;
        Some(Span::new(key.start(), key.len()))
    })
}

/// Run probes in order against `window` of `text`; spans are absolute.
pub fn first_hit(probes: &[Probe], text: &str, window: Window) -> Option<Span> {
    let haystack = window.slice(text);
    probes.iter().find_map(|probe| {
        let span = probe.find(haystack)?.shifted(window.start);
        trace!(?probe, offset = span.offset, "probe matched");
        Some(span)
    })
}
