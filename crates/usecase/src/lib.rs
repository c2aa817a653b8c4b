//! # Use Cases
//!
//! Application-level orchestration of the three numtext tools.
//!
//! - [`orchestrator`]: `stats`, `convert` and `wordcount` runs over a [`LineSource`]
//! - [`parse`]: per-line number parsing with line-numbered diagnostics
//! - [`dto`]: Data transfer objects handed to the presentation layer
//!
//! Use cases depend on the domain and on ports, never on infrastructure.
//!
//! [`LineSource`]: numtext_ports::LineSource

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod parse;

pub use dto::{ConversionOutput, NumberConversion, StatisticsOutput, WordCountOutput, WordFrequency};
pub use orchestrator::{ComputeStatistics, ConvertNumbers, CountWords};
pub use parse::{RejectReason, RejectedLine};
