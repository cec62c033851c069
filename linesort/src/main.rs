//! # linesort
//!
//! A CLI tool that sorts the lines of text files into integers, floats and
//! strings.
//!
//! ## Overview
//!
//! linesort is built on top of linesortlib. It reads every input file line by
//! line, prints how each line was classified, writes one output file per
//! category and optionally prints summary statistics.
//!
//! ## Usage
//!
//! ```bash
//! # Classify two files, outputs go to ./integers.txt, ./floats.txt, ...
//! linesort in1.txt in2.txt
//!
//! # Short statistics (counts only)
//! linesort -s in1.txt
//!
//! # Full statistics, prefixed outputs in an existing directory
//! linesort -f -p run1_ -o /tmp/results in1.txt
//!
//! # Append to the output files instead of replacing them
//! linesort -a in1.txt
//!
//! # Full statistics as JSON
//! linesort -f --format json in1.txt
//! ```

mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use linesortlib::{run, ReportFormat, RunConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("linesort")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Sort the lines of text files into integers, floats and strings")
        .arg(
            Arg::new("files")
                .help("Input files, processed in order")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("short")
                .short('s')
                .long("short")
                .action(ArgAction::SetTrue)
                .help("Print short statistics (counts only)"),
        )
        .arg(
            Arg::new("full")
                .short('f')
                .long("full")
                .action(ArgAction::SetTrue)
                .help("Print full statistics (overrides --short)"),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .value_name("PREFIX")
                .allow_hyphen_values(true)
                .help("Prefix for output file names"),
        )
        .arg(
            Arg::new("append")
                .short('a')
                .long("append")
                .action(ArgAction::SetTrue)
                .help("Append to existing output files instead of replacing them"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Existing, writable directory for output files"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Statistics report format"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .default_value("warn")
                .help("Diagnostic log level on stderr (RUST_LOG takes precedence)"),
        )
}

/// Build the run configuration from matches
fn build_config(matches: &ArgMatches) -> Result<RunConfig, anyhow::Error> {
    let inputs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    let format: ReportFormat = matches
        .get_one::<String>("format")
        .map(|s| s.parse::<ReportFormat>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let mut config = RunConfig::new(inputs)
        .append(matches.get_flag("append"))
        .short(matches.get_flag("short"))
        .full(matches.get_flag("full"))
        .format(format);

    if let Some(prefix) = matches.get_one::<String>("prefix") {
        config = config.prefix(prefix);
    }
    if let Some(dir) = matches.get_one::<PathBuf>("output") {
        config = config.output_dir(dir);
    }

    Ok(config)
}

/// Initialise the global `tracing` subscriber, writing to stderr.
fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

/// Run the pipeline and print its results
fn execute(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let config = build_config(matches)?;
    tracing::debug!(?config, "resolved configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = run(&config, &mut out)?;
    render::print_write_errors(&outcome.write_errors);

    if let Some(report) = &outcome.report {
        render::print_report(&mut out, report, config.format)?;
    }
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(|s| s.as_str())
        .unwrap_or("warn");
    setup_logging(level);

    match execute(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            render::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linesortlib::ReportMode;

    fn config_for(args: &[&str]) -> RunConfig {
        let matches = build_command()
            .try_get_matches_from(std::iter::once("linesort").chain(args.iter().copied()))
            .unwrap();
        build_config(&matches).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = config_for(&["in.txt"]);
        assert_eq!(config.inputs, vec![PathBuf::from("in.txt")]);
        assert_eq!(config.prefix, "");
        assert_eq!(config.output_dir, None);
        assert!(!config.append);
        assert_eq!(config.report_mode(), ReportMode::None);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_all_flags() {
        let config = config_for(&[
            "-s", "-f", "-a", "-p", "out_", "-o", "/tmp/results", "--format", "json", "a.txt",
            "b.txt",
        ]);
        assert_eq!(
            config.inputs,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert_eq!(config.prefix, "out_");
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/results")));
        assert!(config.append);
        assert_eq!(config.report_mode(), ReportMode::Full);
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_flags_after_files() {
        let config = config_for(&["a.txt", "-s", "b.txt"]);
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.report_mode(), ReportMode::Short);
    }

    #[test]
    fn test_missing_prefix_value_is_rejected() {
        let result = build_command().try_get_matches_from(["linesort", "in.txt", "-p"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_inputs_are_rejected() {
        let result = build_command().try_get_matches_from(["linesort", "-s"]);
        assert!(result.is_err());
    }
}
