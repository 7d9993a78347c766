//! Maps evaluation-service violations back onto the raw OpenAPI source text.
//!
//! - [`locator`]: resolve one violation key to a line/column span by pattern
//!   matching against the unparsed YAML or JSON text
//! - [`flatten`]: expand grouped `key -> [violation]` records into one located
//!   record per finding
//! - [`summary`]: counts by severity and by rule
//! - [`report`]: the per-file report and single-key lookup results built from the above
//!
//! Everything here is a pure function of its inputs: no I/O, no shared state,
//! and no error paths. A key that cannot be found resolves to the start of the
//! document.

pub mod flatten;
pub mod locator;
pub mod report;
pub mod summary;

pub use flatten::flatten;
pub use locator::locate;
pub use report::{PositionResult, Report};
pub use summary::summarize;
