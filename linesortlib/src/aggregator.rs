//! The classification pipeline.
//!
//! A run goes through four stages, each taking the [`RunState`] explicitly:
//!
//! 1. [`process_files`]: classify every line of every input into the buckets
//! 2. [`write_outputs`](crate::output::write_outputs): write the category files
//! 3. [`StatsSnapshot::compute`]: summarize the buckets
//! 4. [`render`](crate::report::render): format the selected report
//!
//! [`run`] chains them. Every processed line is echoed to a caller-supplied
//! trace writer (stdout for the CLI) as `Line <n>: <content> (<category>)`.
//! Problems with a single file or line are recorded in the state's error log
//! and echoed to the trace; they never stop the run.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::classify::{Category, Classifier, Outcome};
use crate::error::LinesortError;
use crate::options::RunConfig;
use crate::output::write_outputs;
use crate::report::render;
use crate::state::RunState;
use crate::stats::StatsSnapshot;
use crate::Result;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Buckets and error log
    pub state: RunState,
    /// Statistics over the buckets
    pub snapshot: StatsSnapshot,
    /// Output files that could not be written
    pub write_errors: Vec<LinesortError>,
    /// The selected report, if any
    pub report: Option<String>,
}

/// Run the whole pipeline on a fresh state.
///
/// Fails before touching any file if the configuration is invalid, and later
/// only if the trace writer fails.
pub fn run<W: Write>(config: &RunConfig, trace: &mut W) -> Result<RunOutcome> {
    config.validate()?;

    let state = process_files(config, RunState::new(), trace)?;
    let write_errors = write_outputs(config, &state);
    let snapshot = StatsSnapshot::compute(&state.buckets);
    let report = render(&snapshot, config.report_mode(), config.format)?;

    tracing::info!(
        integers = snapshot.integers.count,
        floats = snapshot.floats.count,
        strings = snapshot.strings.count,
        errors = state.errors.len(),
        "run finished"
    );

    Ok(RunOutcome {
        state,
        snapshot,
        write_errors,
        report,
    })
}

/// Classify every input file, in order, into `state`.
pub fn process_files<W: Write>(
    config: &RunConfig,
    state: RunState,
    trace: &mut W,
) -> Result<RunState> {
    let classifier = Classifier::standard();
    config
        .inputs
        .iter()
        .try_fold(state, |state, path| {
            process_file(path, state, &classifier, trace)
        })
}

/// Classify the lines of one file into `state`.
///
/// A missing or unreadable file is recorded in the error log. Lines read
/// before a mid-file read error stay in the buckets. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD and the line is classified as usual.
/// Line numbers count non-blank lines only.
pub fn process_file<W: Write>(
    path: &Path,
    mut state: RunState,
    classifier: &Classifier,
    trace: &mut W,
) -> Result<RunState> {
    if matches!(path.try_exists(), Ok(false)) {
        let err = LinesortError::FileMissing(path.to_path_buf());
        report_file_error(&mut state, &err, trace)?;
        return Ok(state);
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let err = LinesortError::from_input_io(path.to_path_buf(), e);
            report_file_error(&mut state, &err, trace)?;
            return Ok(state);
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut classified = 0usize;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                let err = LinesortError::from_input_io(path.to_path_buf(), e);
                report_file_error(&mut state, &err, trace)?;
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let content = trim_line(&line);
        if content.is_empty() {
            continue;
        }
        line_no += 1;

        let outcome = classifier.classify(content);
        writeln!(trace, "Line {}: {} ({})", line_no, content, outcome.label())?;
        tracing::debug!(
            file = %path.display(),
            line = line_no,
            outcome = %outcome.label(),
            "classified line"
        );

        match outcome {
            Outcome::Classified(value) => {
                state.buckets.push(value);
                classified += 1;
            }
            Outcome::Invalid(category) => {
                state.record_error(&parse_error(path, content, category));
            }
        }
    }

    tracing::info!(file = %path.display(), lines = classified, "processed file");
    Ok(state)
}

/// Strip ASCII control characters and spaces from both ends. Other Unicode
/// whitespace, such as a no-break space, is content.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

fn parse_error(path: &Path, content: &str, category: Category) -> LinesortError {
    let file = path.to_path_buf();
    let line = content.to_string();
    match category {
        Category::Float => LinesortError::InvalidFloat { file, line },
        _ => LinesortError::InvalidInteger { file, line },
    }
}

fn report_file_error<W: Write>(
    state: &mut RunState,
    err: &LinesortError,
    trace: &mut W,
) -> Result<()> {
    tracing::debug!(error = %err, "skipping input");
    let message = state.record_error(err);
    writeln!(trace, "{message}")?;
    Ok(())
}
