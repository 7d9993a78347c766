//! lens CLI: map API lint violations back to source positions.
//!
//! This binary provides the `lens` command with subcommands for full reports,
//! summaries, and single-key lookups. See `lens --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let formatter: Box<dyn lens_output::OutputFormatter> = if cli.json {
        Box::new(lens_output::json::JsonFormatter)
    } else if cli.compact {
        Box::new(lens_output::compact::CompactFormatter)
    } else {
        Box::new(lens_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Report { input, strict } => commands::report::run(&*formatter, &input, strict),
        Commands::Summary { input } => commands::summary::run(&*formatter, &input),
        Commands::Locate {
            spec,
            kind,
            operation_id,
            path,
            schema_path,
            http_code,
            tag,
            message,
        } => commands::locate::run(
            &*formatter,
            &spec,
            lens_core::types::RawViolationKey {
                violation_key_type: kind,
                operation_id,
                path,
                schema_path,
                http_code,
                tag,
            },
            message.as_deref(),
        ),
    };

    std::process::exit(exit_code);
}
