use std::time::Duration;

use numtext_domain::{ConversionResult, Statistics};
use numtext_shared_kernel::Frequency;
use serde::{Serialize, Serializer};

use crate::parse::RejectedLine;

fn as_seconds<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Result of the `stats` tool.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsOutput {
    pub source: String,
    pub statistics: Statistics,
    pub rejected: Vec<RejectedLine>,
    #[serde(rename = "elapsed_seconds", serialize_with = "as_seconds")]
    pub elapsed: Duration,
}

/// One converted input value with its 1-based position among valid values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberConversion {
    pub index: usize,
    #[serde(flatten)]
    pub result: ConversionResult,
}

/// Result of the `convert` tool.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    pub source: String,
    pub conversions: Vec<NumberConversion>,
    pub rejected: Vec<RejectedLine>,
    #[serde(rename = "elapsed_seconds", serialize_with = "as_seconds")]
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: Frequency,
}

/// Result of the `wordcount` tool.
#[derive(Debug, Clone, Serialize)]
pub struct WordCountOutput {
    pub source: String,
    pub total_words: usize,
    pub distinct_words: usize,
    /// Lexicographic by code point.
    pub words: Vec<WordFrequency>,
    #[serde(rename = "elapsed_seconds", serialize_with = "as_seconds")]
    pub elapsed: Duration,
}
