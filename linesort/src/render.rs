//! Console output for the CLI

use std::io::{self, Write};

use console::Style;
use linesortlib::{LinesortError, ReportFormat};

const REPORT_HEADER: &str = "Statistics:";

/// Style for the report header on stdout
fn header_style() -> Style {
    Style::new().bold()
}

/// Style for the `Error:` tag on stderr
fn error_style() -> Style {
    Style::new().red().bold().for_stderr()
}

/// Write the statistics report, highlighting the text header when the
/// terminal supports it.
pub fn print_report<W: Write>(out: &mut W, report: &str, format: ReportFormat) -> io::Result<()> {
    match format {
        ReportFormat::Json => write!(out, "{report}"),
        ReportFormat::Text => {
            let styled = header_style().apply_to(REPORT_HEADER).to_string();
            write!(out, "{}", report.replacen(REPORT_HEADER, &styled, 1))
        }
    }
}

/// Print an error to stderr as `Error: <message>`.
pub fn print_error(err: &dyn std::fmt::Display) {
    eprintln!("{} {err}", error_style().apply_to("Error:"));
}

/// Print every output file that could not be written.
pub fn print_write_errors(errors: &[LinesortError]) {
    for err in errors {
        print_error(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_json_report_verbatim() {
        let mut out = Vec::new();
        print_report(&mut out, "{\"integers\": 1}\n", ReportFormat::Json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"integers\": 1}\n");
    }

    #[test]
    fn test_print_text_report_keeps_content() {
        console::set_colors_enabled(false);
        let report = "\nStatistics:\nIntegers: 0\nFloats: 0\nStrings: 0\n";
        let mut out = Vec::new();
        print_report(&mut out, report, ReportFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report);
    }
}
