//! # linesortlib
//!
//! Sort the lines of text files into integers, floats and strings, and
//! summarize each category.
//!
//! ## Overview
//!
//! Every non-blank line (after trimming) is classified by the first matching
//! rule:
//!
//! - **Integer**: optional sign and decimal digits, parsed as `i64`
//! - **Float**: optional sign, optional integer digits, a decimal point,
//!   fraction digits and an optional exponent, parsed as `f64`
//! - **String**: anything else
//!
//! Values accumulate in per-category buckets across all input files, in input
//! order. After processing, each non-empty bucket is written to its own file
//! (`integers.txt`, `floats.txt`, `strings.txt`, plus `errors.txt` when
//! something went wrong), and a short or full statistics report can be
//! rendered.
//!
//! ## Features
//!
//! - **Explicit run state**: buckets and the error log live in a [`RunState`]
//!   threaded through each stage; reset it to start over
//! - **Never aborts on bad input**: missing files, unreadable files and
//!   unparseable numbers are recorded and the run carries on
//! - **Trace output**: every line's classification is written to a
//!   caller-supplied writer
//!
//! ## Example
//!
//! ```rust
//! use linesortlib::{run, RunConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("input.txt");
//! fs::write(&input, "42\n3.14\nhello\n\n-7\n").unwrap();
//!
//! let config = RunConfig::new([&input]).output_dir(dir.path()).full(true);
//! let mut trace: Vec<u8> = Vec::new();
//! let outcome = run(&config, &mut trace).unwrap();
//!
//! assert_eq!(outcome.state.buckets.integers, vec![42, -7]);
//! assert_eq!(outcome.snapshot.strings.count, 1);
//! assert_eq!(
//!     fs::read_to_string(dir.path().join("integers.txt")).unwrap(),
//!     "42\n-7\n"
//! );
//! assert!(outcome.report.unwrap().contains("Integers: 2 (min: -7, max: 42"));
//! ```

pub mod aggregator;
pub mod classify;
pub mod error;
pub mod options;
pub mod output;
pub mod report;
pub mod state;
pub mod stats;

pub use aggregator::{process_file, process_files, run, RunOutcome};
pub use classify::{Category, Classifier, Outcome, Rule, Value};
pub use error::LinesortError;
pub use options::{ReportFormat, ReportMode, RunConfig};
pub use output::{format_float, output_path, write_outputs};
pub use report::{render, render_full, render_short, ShortSummary};
pub use state::{Buckets, RunState};
pub use stats::{CategoryStats, FloatSummary, IntegerSummary, StatsSnapshot, StringSummary};

/// Result type for linesortlib operations
pub type Result<T> = std::result::Result<T, LinesortError>;
