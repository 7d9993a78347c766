use std::path::Path;

use lens_core::config::LensConfig;
use lens_core::response::ViolationInput;
use lens_core::Result;
use lens_locate::Report;
use tracing::{debug, warn};

use crate::cli_args::InputArgs;

/// Directory holding `.restlens.json`: the document's own directory, else the cwd.
fn config_dir(spec: &Path) -> &Path {
    match spec.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Read both inputs and build the located report.
pub fn load_report(input: &InputArgs) -> Result<Report> {
    let spec_path = Path::new(&input.spec);
    let text = lens_core::error::read_text(spec_path)?;
    let violations_input =
        lens_core::error::read_json::<ViolationInput>(Path::new(&input.violations))?;
    if let Some(status) = violations_input.status().filter(|s| !s.is_terminal()) {
        warn!(
            ?status,
            "evaluation still in progress, results may be incomplete"
        );
    }
    let violations = violations_input.into_violations();

    let config = LensConfig::load(config_dir(spec_path));
    let include_info = input.include_info || config.include_info_severity;
    debug!(
        keys = violations.len(),
        include_info,
        "building report for {}",
        input.spec
    );

    Ok(Report::build(&input.spec, &text, &violations, include_info)
        .with_project(config.project_ref()))
}
