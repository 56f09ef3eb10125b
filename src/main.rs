// Parking Facility Registry - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/parking-facility-registry --script commands.jsonl
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/parking-facility-registry --config config.json --output-format pretty --verbose
// ```
//
// Add `--log-dir logs` to also write daily rolling JSON logs.

use anyhow::{Context, Result};
use clap::Parser;
use parking_facility_registry::session::{
    load_script, CommandOutcome, LoggingConfig, SessionError, SessionReport, SessionRunner,
};
use parking_facility_registry::types::{CliArgs, OutputFormat, RegistryConfig};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match RegistryConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result =
        LoggingConfig::from_cli_flags(args.debug, args.verbose, args.log_dir.as_deref()).init();

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Facility Registry");

    if let Err(e) = run(args) {
        error!("Facility Registry failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Facility Registry completed successfully");
}

fn run(args: CliArgs) -> Result<()> {
    let dry_run = args.dry_run;

    let config = RegistryConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let output_format = config.get_output_format()?;
    info!("Configuration loaded and validated successfully");

    let script_path = config.script.clone().ok_or(SessionError::MissingScript)?;
    let commands = load_script(&script_path)
        .with_context(|| format!("Failed to load script '{}'", script_path))?;
    info!(commands = commands.len(), script = %script_path, "Script loaded");

    if dry_run {
        eprintln!("Configuration and script validation successful!");
        eprintln!("Dry run mode - {} commands will not be executed.", commands.len());
        print_configuration_summary(&config);
        return Ok(());
    }

    let mut runner = SessionRunner::from_config(&config)?;
    let report = runner.run(commands);

    write_outcomes(&report.outcomes, output_format).context("Failed to write responses")?;

    if let Some(report_path) = &config.report_output {
        write_report(&report, report_path)
            .with_context(|| format!("Failed to write session report '{}'", report_path))?;
        info!(path = %report_path, "Session report written");
    }

    eprintln!("{}", report.summary());
    Ok(())
}

/// Print one response per command to stdout
fn write_outcomes(outcomes: &[CommandOutcome], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for outcome in outcomes {
        let line = match format {
            OutputFormat::Json => serde_json::to_string(outcome)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(outcome)?,
        };
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the full session report as pretty JSON
fn write_report(report: &SessionReport, path: &str) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;
    fs::write(path, content)?;
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &RegistryConfig) {
    eprintln!("Configuration:");
    eprintln!("  Default Caller: {}", config.default_caller);
    if let Some(script) = &config.script {
        eprintln!("  Script: {}", script);
    }
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(report_output) = &config.report_output {
        eprintln!("  Report Output: {}", report_output);
    }
    eprintln!("  Halt On Error: {}", config.halt_on_error);
    eprintln!();
}
