//! # Domain
//!
//! The algorithm core of numtext. Everything here is a pure function of its
//! inputs and performs no I/O:
//!
//! - [`analytics`]: three-way quicksort, frequency tables and descriptive statistics
//! - [`numeric`]: Newton-Raphson square root and two's-complement radix conversion
//! - [`text`]: whitespace tokenizer and case-folding word frequency counter

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod numeric;
pub mod text;

pub use analytics::{
    frequency::{FrequencyTable, NumberKey},
    sort::quicksort,
    statistics::{Mode, Statistics, compute_statistics},
};
pub use numeric::{
    radix::{ConversionResult, convert, to_binary, to_hexadecimal},
    sqrt::sqrt_newton,
};
pub use text::{
    counter::{WordFrequencyCounter, count, fold_ascii, sorted_words},
    tokenizer::{WordToken, tokenize},
};
