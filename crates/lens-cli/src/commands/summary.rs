use lens_output::OutputFormatter;

use crate::cli_args::InputArgs;

/// Run `lens summary`: print only the rolled-up counts.
pub fn run(formatter: &dyn OutputFormatter, input: &InputArgs) -> i32 {
    match super::input::load_report(input) {
        Ok(report) => {
            print!("{}", formatter.format_summary(&report.summary));
            0
        }
        Err(e) => {
            eprintln!("lens summary: {}", e);
            2
        }
    }
}
