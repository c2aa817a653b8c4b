//! Per-line parsing for the numeric tools.
//!
//! Lines are trimmed and blank lines are skipped without comment. Anything
//! else that fails to parse is collected as a [`RejectedLine`] so the run can
//! carry on with the remaining input.

use std::fmt;

use numtext_ports::source::SourceLine;
use numtext_shared_kernel::LineNumber;
use serde::Serialize;

/// Largest magnitude (exclusive) an `f64` may have and still fit in `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    NotANumber,
    NotAnInteger,
    OutOfRange,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotANumber => "is not a valid number",
            Self::NotAnInteger => "is not an integer",
            Self::OutOfRange => "is outside the supported integer range",
        };
        f.write_str(text)
    }
}

/// A non-blank input line that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line: LineNumber,
    /// The trimmed line content.
    pub text: String,
    pub reason: RejectReason,
}

impl fmt::Display for RejectedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid data on line {}: '{}' {}", self.line, self.text, self.reason)
    }
}

/// Values that parsed, in input order, plus the lines that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub values: Vec<T>,
    pub rejected: Vec<RejectedLine>,
}

/// Apply `parse` to every non-blank, trimmed line.
pub fn parse_lines<T, F>(lines: &[SourceLine], parse: F) -> Parsed<T>
where
    F: Fn(&str) -> Result<T, RejectReason>,
{
    let mut values = Vec::with_capacity(lines.len());
    let mut rejected = Vec::new();

    for line in lines {
        let text = line.text.trim();
        if text.is_empty() {
            continue;
        }
        match parse(text) {
            Ok(value) => values.push(value),
            Err(reason) => {
                log::debug!("rejected line {}: '{text}' {reason}", line.number);
                rejected.push(RejectedLine { line: line.number, text: text.to_string(), reason });
            }
        }
    }

    Parsed { values, rejected }
}

/// A finite real number.
pub fn parse_number(text: &str) -> Result<f64, RejectReason> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RejectReason::NotANumber),
    }
}

/// A whole number, written either as an integer or as a real without a
/// fractional part (`3.0`, `1e3`).
pub fn parse_integer(text: &str) -> Result<i64, RejectReason> {
    if let Ok(value) = text.parse::<i64>() {
        return Ok(value);
    }
    let value = text.parse::<f64>().map_err(|_| RejectReason::NotANumber)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(RejectReason::NotAnInteger);
    }
    if value < -I64_BOUND || value >= I64_BOUND {
        return Err(RejectReason::OutOfRange);
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(value as i64)
}
