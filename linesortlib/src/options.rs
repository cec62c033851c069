//! Run configuration.
//!
//! A [`RunConfig`] is assembled once (normally from command-line flags),
//! validated, and then only read for the rest of the run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::LinesortError;
use crate::Result;

/// Which statistics report a run prints at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// No statistics are printed
    #[default]
    None,
    /// Counts per category
    Short,
    /// Counts plus min/max/sum/avg/median and string length extremes
    Full,
}

impl ReportMode {
    /// Resolve the short/full flags. Full wins when both are set.
    pub fn from_flags(short: bool, full: bool) -> Self {
        if full {
            ReportMode::Full
        } else if short {
            ReportMode::Short
        } else {
            ReportMode::None
        }
    }
}

/// How the statistics report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text lines
    #[default]
    Text,
    /// A JSON document
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("unknown report format: {s}")),
        }
    }
}

/// Options for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Input files, processed in this order
    pub inputs: Vec<PathBuf>,
    /// Prepended to every output file name
    pub prefix: String,
    /// Directory the output files go into (None = working directory)
    pub output_dir: Option<PathBuf>,
    /// Append to output files instead of truncating them
    pub append: bool,
    /// Short report requested
    pub short: bool,
    /// Full report requested
    pub full: bool,
    /// Rendering of the report
    pub format: ReportFormat,
}

impl RunConfig {
    /// Create a configuration for the given input files.
    pub fn new<I, P>(inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the output file name prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Enable or disable append mode.
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Request the short report.
    pub fn short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    /// Request the full report.
    pub fn full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    /// Set the report format.
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// The report this configuration selects.
    pub fn report_mode(&self) -> ReportMode {
        ReportMode::from_flags(self.short, self.full)
    }

    /// Check the configuration before any file is touched.
    ///
    /// Fails when there are no inputs, or when an output directory was given
    /// that does not exist, is not a directory, or cannot be written to.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(LinesortError::NoInputFiles);
        }
        if let Some(dir) = &self.output_dir {
            if !is_writable_dir(dir) {
                return Err(LinesortError::OutputDirNotWritable(dir.clone()));
            }
        }
        Ok(())
    }
}

/// Whether the current user can create files in `dir`. Permission bits alone
/// say nothing about ownership, so this creates and removes a scratch file.
fn is_writable_dir(dir: &Path) -> bool {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => tempfile::Builder::new()
            .prefix(".linesort-")
            .tempfile_in(dir)
            .is_ok(),
        _ => false,
    }
}
