use std::path::Path;

use lens_core::types::{RawViolationKey, ViolationKey};
use lens_locate::PositionResult;
use lens_output::OutputFormatter;
use tracing::warn;

/// Run `lens locate`: resolve one key against the document text.
pub fn run(
    formatter: &dyn OutputFormatter,
    spec: &str,
    raw: RawViolationKey,
    message: Option<&str>,
) -> i32 {
    let text = match lens_core::error::read_text(Path::new(spec)) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("lens locate: {}", e);
            return 2;
        }
    };

    let key = ViolationKey::from(raw);
    if let ViolationKey::Unknown(kind) = &key {
        warn!("unknown key type '{}', reporting document start", kind);
    }

    let result = PositionResult::resolve(spec, &text, key, message);
    print!("{}", formatter.format_position(&result));
    0
}
