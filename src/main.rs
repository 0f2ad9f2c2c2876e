mod cli;

use cli::Args;
use dupe_report::adapters::outbound::console::StderrProgressReporter;
use dupe_report::adapters::outbound::formatters::JsonReportFormatter;
use dupe_report::adapters::outbound::stdio::{StdinReader, StdoutPresenter};
use dupe_report::application::use_cases::AnalyzeDuplicationUseCase;
use dupe_report::config::{load_config_from_path, PipelineConfig};
use dupe_report::ports::outbound::{OutputPresenter, ReportFormatter};
use dupe_report::shared::error::ExitCode;
use dupe_report::shared::Result;
use std::backtrace::BacktraceStatus;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", describe_error(&e));
        process::exit(ExitCode::Failure.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(path)?,
        None => PipelineConfig::default(),
    };

    // Create adapters (Dependency Injection)
    let input_reader = StdinReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = AnalyzeDuplicationUseCase::new(input_reader, progress_reporter, config);

    // Execute use case
    let response = use_case.execute()?;

    // Nothing reaches stdout until the whole report is built
    let output = JsonReportFormatter::new().format(&response.report)?;
    StdoutPresenter::new().present(&output)?;

    Ok(())
}

/// Renders a fatal error with its cause chain and, if captured, the backtrace
fn describe_error(e: &anyhow::Error) -> String {
    let mut text = format!("\n❌ An error occurred:\n\n{}\n", e);

    // Display error chain
    for cause in e.chain().skip(1) {
        text.push_str(&format!("\nCaused by: {}\n", cause));
    }

    let backtrace = e.backtrace();
    if backtrace.status() == BacktraceStatus::Captured {
        text.push_str(&format!("\nStack backtrace:\n{}\n", backtrace));
    }

    text
}
