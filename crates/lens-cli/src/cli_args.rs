use clap::{Args, Parser, Subcommand};

// Display order for the log level option (placed at end of help text)
const LOG_LEVEL_DISPLAY_ORDER: usize = 100;

#[derive(Parser, Debug)]
#[command(name = "lens", version, about = "Map API lint violations back to spec source positions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true, conflicts_with = "compact")]
    pub json: bool,

    /// One line per finding, errors first
    #[arg(long, global = true)]
    pub compact: bool,

    /// Log level (see https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
    /// [env: LENS_LOG=] [default: warn]
    #[arg(
        long,
        env = "LENS_LOG",
        default_value = "warn",
        global = true,
        hide_default_value = true,
        hide_env = true,
        display_order = LOG_LEVEL_DISPLAY_ORDER,
        verbatim_doc_comment
    )]
    pub log_level: String,
}

/// Spec document plus the violations file produced for it.
#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// OpenAPI document (YAML or JSON)
    pub spec: String,
    /// Violations JSON: a list of key/violations pairs or a full evaluation response
    pub violations: String,
    /// Keep info-severity findings
    #[arg(long)]
    pub include_info: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Locate every violation and print the full report
    Report {
        #[command(flatten)]
        input: InputArgs,
        /// Exit non-zero when any error-severity finding remains
        #[arg(long)]
        strict: bool,
    },

    /// Print only the per-severity and per-rule summary
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Resolve a single violation key to a position
    Locate {
        /// OpenAPI document (YAML or JSON)
        spec: String,
        /// Key type: operation_id, path, schema_path, http_code, tag, info, system
        #[arg(long)]
        kind: String,
        #[arg(long)]
        operation_id: Option<String>,
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        schema_path: Option<String>,
        #[arg(long)]
        http_code: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// Violation message, used to narrow schema and path lookups
        #[arg(long)]
        message: Option<String>,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
