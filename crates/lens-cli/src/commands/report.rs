use lens_output::OutputFormatter;

use crate::cli_args::InputArgs;

/// Run `lens report`: locate every finding and print the report.
pub fn run(formatter: &dyn OutputFormatter, input: &InputArgs, strict: bool) -> i32 {
    let report = match super::input::load_report(input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("lens report: {}", e);
            return 2;
        }
    };

    print!("{}", formatter.format_report(&report));

    if strict && report.has_errors() {
        1
    } else {
        0
    }
}
