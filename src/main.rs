//! tfjson CLI entrypoint.
//!
//! Reads a plan export, prints the converted document to stdout, and reports
//! any failure as a single line on stderr.

use std::io::Write;
use std::process::ExitCode;

use tfjson::cli::{Cli, OutputFormatter, is_informational, single_line_error};
use tfjson::config::{Settings, load_dotenv};
use tfjson::error::Result;
use tfjson::pipeline::convert_file;
use tfjson::plan::PlanSummary;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    // .env must be loaded before clap reads TFJSON_* fallbacks
    let dotenv = load_dotenv(".");

    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", single_line_error(&e));
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    init_logging(cli.verbose);

    let result = dotenv.and_then(|path| {
        if let Some(path) = path {
            debug!("Loaded environment from {}", path.display());
        }
        run(&cli)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e.to_string().replace('\n', " ");
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
///
/// Logs go to stderr so stdout only ever carries the document.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("TFJSON_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Converts the plan named on the command line.
fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::from_cli(cli);
    settings.validate()?;
    debug!("Effective settings: {settings:?}");

    let rendered = convert_file(&cli.plan, &settings)?;

    if settings.summary {
        let summary = PlanSummary::from_diff(&rendered.conversion.plan.diff);
        eprint!("{}", OutputFormatter::new().format_summary(&summary));
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.output)?;
    stdout.flush()?;

    Ok(())
}
