//! Writing the category files.
//!
//! Each non-empty bucket is written to `<dir>/<prefix><name>.txt`, one value
//! per line. `errors.txt` is only written when the error log is not empty.
//! Files are truncated unless the run is in append mode.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::LinesortError;
use crate::options::RunConfig;
use crate::state::RunState;
use crate::Result;

pub const INTEGERS_FILE: &str = "integers.txt";
pub const FLOATS_FILE: &str = "floats.txt";
pub const STRINGS_FILE: &str = "strings.txt";
pub const ERRORS_FILE: &str = "errors.txt";

/// Render a float so that it always reads back as a float.
///
/// Rust's `Display` prints `5.0` as `5`, which would re-classify as an
/// integer. This keeps a decimal point in every finite value: `5.0`, `0.1`,
/// `1.0e100`, `1.5e-7`.
pub fn format_float(value: f64) -> String {
    let text = format!("{value:?}");
    if !value.is_finite() || text.contains('.') {
        return text;
    }
    match text.find('e') {
        Some(pos) => format!("{}.0{}", &text[..pos], &text[pos..]),
        None => format!("{text}.0"),
    }
}

/// Path of one output file for the given configuration.
pub fn output_path(config: &RunConfig, name: &str) -> PathBuf {
    let file_name = format!("{}{}", config.prefix, name);
    match &config.output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write every non-empty bucket and the error log.
///
/// A failure on one file does not stop the others; all failures are returned
/// in the order they happened.
pub fn write_outputs(config: &RunConfig, state: &RunState) -> Vec<LinesortError> {
    let buckets = &state.buckets;
    let integers: Vec<String> = buckets.integers.iter().map(i64::to_string).collect();
    let floats: Vec<String> = buckets.floats.iter().copied().map(format_float).collect();

    let files: [(&str, &[String]); 4] = [
        (INTEGERS_FILE, integers.as_slice()),
        (FLOATS_FILE, floats.as_slice()),
        (STRINGS_FILE, buckets.strings.as_slice()),
        (ERRORS_FILE, state.errors.as_slice()),
    ];

    let mut failures = Vec::new();
    for (name, lines) in files {
        if lines.is_empty() {
            continue;
        }
        let path = output_path(config, name);
        match write_lines(&path, lines, config.append) {
            Ok(()) => {
                tracing::info!(path = %path.display(), lines = lines.len(), "wrote output file")
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to write output file");
                failures.push(err);
            }
        }
    }
    failures
}

/// Write `lines` to `path`, newline-terminated.
pub fn write_lines<S: AsRef<str>>(
    path: &Path,
    lines: &[S],
    append: bool,
) -> Result<()> {
    let to_error = |err| LinesortError::from_output_io(path.to_path_buf(), err);

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(to_error)?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(to_error)?;
    }
    writer.flush().map_err(to_error)
}
