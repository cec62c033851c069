//! Rendering of the statistics report.
//!
//! Text output:
//!
//! ```text
//!
//! Statistics:
//! Integers: 2 (min: -7, max: 42, sum: 35, avg: 17.5, median: 42)
//! Floats: 0
//! Strings: 1 (shortest: 5, longest: 5)
//! ```
//!
//! The short report keeps only the counts. JSON output carries the same
//! information as a document.

use std::fmt::Write as _;

use serde::Serialize;

use crate::options::{ReportFormat, ReportMode};
use crate::output::format_float;
use crate::stats::StatsSnapshot;
use crate::Result;

/// Counts only, as serialized for `--format json` with the short report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShortSummary {
    pub integers: usize,
    pub floats: usize,
    pub strings: usize,
}

impl From<&StatsSnapshot> for ShortSummary {
    fn from(snapshot: &StatsSnapshot) -> Self {
        Self {
            integers: snapshot.integers.count,
            floats: snapshot.floats.count,
            strings: snapshot.strings.count,
        }
    }
}

/// Render the report selected by `mode`, or `None` when no report is wanted.
pub fn render(
    snapshot: &StatsSnapshot,
    mode: ReportMode,
    format: ReportFormat,
) -> Result<Option<String>> {
    let rendered = match (mode, format) {
        (ReportMode::None, _) => return Ok(None),
        (ReportMode::Short, ReportFormat::Text) => render_short(snapshot),
        (ReportMode::Full, ReportFormat::Text) => render_full(snapshot),
        (ReportMode::Short, ReportFormat::Json) => {
            serde_json::to_string_pretty(&ShortSummary::from(snapshot))? + "\n"
        }
        (ReportMode::Full, ReportFormat::Json) => serde_json::to_string_pretty(snapshot)? + "\n",
    };
    Ok(Some(rendered))
}

/// Counts per category.
pub fn render_short(snapshot: &StatsSnapshot) -> String {
    let mut out = String::from("\nStatistics:\n");
    let _ = writeln!(out, "Integers: {}", snapshot.integers.count);
    let _ = writeln!(out, "Floats: {}", snapshot.floats.count);
    let _ = writeln!(out, "Strings: {}", snapshot.strings.count);
    out
}

/// Counts plus every derived figure; empty categories show the bare count.
pub fn render_full(snapshot: &StatsSnapshot) -> String {
    let mut out = String::from("\nStatistics:\n");

    let ints = &snapshot.integers;
    let _ = write!(out, "Integers: {}", ints.count);
    if let Some(s) = &ints.summary {
        let _ = write!(
            out,
            " (min: {}, max: {}, sum: {}, avg: {}, median: {})",
            s.min,
            s.max,
            s.sum,
            format_float(s.average),
            s.median
        );
    }
    out.push('\n');

    let floats = &snapshot.floats;
    let _ = write!(out, "Floats: {}", floats.count);
    if let Some(s) = &floats.summary {
        let _ = write!(
            out,
            " (min: {}, max: {}, sum: {}, avg: {}, median: {})",
            format_float(s.min),
            format_float(s.max),
            format_float(s.sum),
            format_float(s.average),
            format_float(s.median)
        );
    }
    out.push('\n');

    let strings = &snapshot.strings;
    let _ = write!(out, "Strings: {}", strings.count);
    if let Some(s) = &strings.summary {
        let _ = write!(out, " (shortest: {}, longest: {})", s.shortest, s.longest);
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Buckets;
    use crate::stats::{float_stats, integer_stats};

    fn sample() -> StatsSnapshot {
        let mut buckets = Buckets::new();
        buckets.integers = vec![42, -7];
        buckets.strings = vec!["hello".to_string()];
        buckets.string_lengths = vec![5];
        StatsSnapshot::compute(&buckets)
    }

    #[test]
    fn test_no_report() {
        let rendered = render(&sample(), ReportMode::None, ReportFormat::Text).unwrap();
        assert!(rendered.is_none());
    }

    #[test]
    fn test_short_report() {
        let rendered = render_short(&sample());
        assert_eq!(
            rendered,
            "\nStatistics:\nIntegers: 2\nFloats: 0\nStrings: 1\n"
        );
    }

    #[test]
    fn test_full_report() {
        let rendered = render_full(&sample());
        assert_eq!(
            rendered,
            "\nStatistics:\n\
             Integers: 2 (min: -7, max: 42, sum: 35, avg: 17.5, median: 42)\n\
             Floats: 0\n\
             Strings: 1 (shortest: 5, longest: 5)\n"
        );
    }

    #[test]
    fn test_full_report_floats() {
        let snapshot = StatsSnapshot {
            floats: float_stats(&[1.0, 0.5]),
            ..Default::default()
        };
        let rendered = render_full(&snapshot);
        assert!(rendered
            .contains("Floats: 2 (min: 0.5, max: 1.0, sum: 1.5, avg: 0.75, median: 1.0)"));
    }

    #[test]
    fn test_full_report_integer_average_keeps_point() {
        let snapshot = StatsSnapshot {
            integers: integer_stats(&[2, 4]),
            ..Default::default()
        };
        let rendered = render_full(&snapshot);
        assert!(rendered.contains("avg: 3.0"));
    }

    #[test]
    fn test_render_dispatch() {
        let snapshot = sample();
        assert_eq!(
            render(&snapshot, ReportMode::Short, ReportFormat::Text).unwrap(),
            Some(render_short(&snapshot))
        );
        assert_eq!(
            render(&snapshot, ReportMode::Full, ReportFormat::Text).unwrap(),
            Some(render_full(&snapshot))
        );
    }

    #[test]
    fn test_json_reports() {
        let snapshot = sample();

        let short = render(&snapshot, ReportMode::Short, ReportFormat::Json)
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&short).unwrap();
        assert_eq!(value["integers"], 2);
        assert_eq!(value["floats"], 0);
        assert_eq!(value["strings"], 1);

        let full = render(&snapshot, ReportMode::Full, ReportFormat::Json)
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&full).unwrap();
        assert_eq!(value["integers"]["count"], 2);
        assert_eq!(value["integers"]["summary"]["median"], 42);
        assert!(value["floats"]["summary"].is_null());
        assert_eq!(value["strings"]["summary"]["longest"], 5);
    }
}
