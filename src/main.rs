//! @ai:module:intent CLI entry point for the production report summary
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on summarizer

use clap::Parser;
use lighthouse_summary::{ReportSummarizer, DEFAULT_REPORT_PATH};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Print category scores and key metrics from lighthouse-report-prod.json
#[derive(Parser)]
#[command(name = "lighthouse-summary")]
#[command(author, version, about)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lighthouse_summary=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let summarizer = ReportSummarizer::new(DEFAULT_REPORT_PATH);
    let stdout = std::io::stdout();

    // Report failures are printed on stdout; the exit status stays 0 either way
    if let Err(e) = summarizer.run(&mut stdout.lock()) {
        tracing::error!("Failed to write summary: {}", e);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_rejects_report_argument() {
        assert!(Cli::try_parse_from(["lighthouse-summary"]).is_ok());
        assert!(Cli::try_parse_from(["lighthouse-summary", "other-report.json"]).is_err());
    }
}
