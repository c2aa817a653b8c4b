// src/presentation.rs
//! Report rendering for the three tools.
//!
//! `text` follows the line-oriented layout of the classic exercise tools;
//! `json` and `yaml` serialize the use-case output as-is.

use std::fmt::Write as _;

use numtext_shared_kernel::Result;
use numtext_usecase::{ConversionOutput, RejectedLine, StatisticsOutput, WordCountOutput};
use serde::Serialize;

use crate::options::OutputFormat;

/// Something the binary can print and save.
pub trait Report: Serialize {
    fn render_text(&self) -> String;

    /// Lines skipped while parsing the input.
    fn rejected(&self) -> &[RejectedLine] {
        &[]
    }
}

fn elapsed_line(out: &mut String, seconds: f64) {
    let _ = writeln!(out, "Elapsed Time: {seconds:.6} seconds");
}

impl Report for StatisticsOutput {
    fn render_text(&self) -> String {
        let s = &self.statistics;
        let mut out = String::from("Descriptive Statistics:\n");
        let _ = writeln!(out, "Count: {}", s.count);
        let _ = writeln!(out, "Mean: {}", s.mean);
        let _ = writeln!(out, "Median: {}", s.median);
        let _ = writeln!(out, "Mode: {}", s.mode);
        let _ = writeln!(out, "Sample Variance: {}", s.variance);
        let _ = writeln!(out, "Standard Deviation: {}", s.std_deviation);
        elapsed_line(&mut out, self.elapsed.as_secs_f64());
        out
    }

    fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }
}

impl Report for ConversionOutput {
    fn render_text(&self) -> String {
        let mut out = String::from("Number Conversions:\n");
        for c in &self.conversions {
            let _ = writeln!(
                out,
                "Number {}: {} | Binary: {} | Hexadecimal: {}",
                c.index, c.result.value, c.result.binary, c.result.hexadecimal
            );
        }
        elapsed_line(&mut out, self.elapsed.as_secs_f64());
        out
    }

    fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }
}

impl Report for WordCountOutput {
    fn render_text(&self) -> String {
        let mut out = String::from("Word Count Results:\n");
        for entry in &self.words {
            let _ = writeln!(out, "Word: '{}' -> Frequency: {}", entry.word, entry.frequency);
        }
        let _ = writeln!(out, "Total Words: {}", self.total_words);
        let _ = writeln!(out, "Distinct Words: {}", self.distinct_words);
        elapsed_line(&mut out, self.elapsed.as_secs_f64());
        out
    }
}

/// Render `report` in the requested format.
///
/// # Errors
/// Serialization failures for `json` / `yaml`.
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    };
    Ok(rendered)
}

/// Report skipped input lines on stderr.
pub fn print_rejected(rejected: &[RejectedLine]) {
    for line in rejected {
        eprintln!("{line}");
    }
}
