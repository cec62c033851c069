//! Error types for linesortlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while sorting lines.
///
/// Only configuration errors and trace I/O failures abort a run. Per-file,
/// per-line and output-write errors are recorded and the run carries on.
///
/// Per-file messages carry their own `Error: ` tag, so the error log and
/// `errors.txt` hold the same text the trace shows.
#[derive(Error, Debug)]
pub enum LinesortError {
    /// No input files were given
    #[error("No input files provided.")]
    NoInputFiles,

    /// Output directory is missing, not a directory, or not writable
    #[error("Output path {} is not writable.", .0.display())]
    OutputDirNotWritable(PathBuf),

    /// Input path did not exist when the run reached it
    #[error("Error: File {} does not exist.", .0.display())]
    FileMissing(PathBuf),

    /// Input path disappeared between the existence check and the open
    #[error("Error: File {} not found.", .0.display())]
    FileNotFound(PathBuf),

    /// Input file could not be opened for reading
    #[error("Error: Permission denied reading {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Failed to read an input file
    #[error("Error: Could not read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Line has the shape of an integer but does not fit in an `i64`
    #[error("{}: {line} (invalid integer)", .file.display())]
    InvalidInteger { file: PathBuf, line: String },

    /// Line has the shape of a float but could not be parsed
    #[error("{}: {line} (invalid float)", .file.display())]
    InvalidFloat { file: PathBuf, line: String },

    /// Output file could not be opened for writing
    #[error("Permission denied writing to {}", .0.display())]
    OutputPermissionDenied(PathBuf),

    /// Failed to write an output file
    #[error("Could not write to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the report
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the trace sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinesortError {
    /// Map an I/O error raised while opening or reading an input file.
    pub fn from_input_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LinesortError::FileNotFound(path),
            std::io::ErrorKind::PermissionDenied => LinesortError::PermissionDenied(path),
            _ => LinesortError::FileRead { path, source: err },
        }
    }

    /// Map an I/O error raised while writing an output file.
    pub fn from_output_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => LinesortError::OutputPermissionDenied(path),
            _ => LinesortError::OutputWrite { path, source: err },
        }
    }
}
