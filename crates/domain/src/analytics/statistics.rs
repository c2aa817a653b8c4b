//! Descriptive statistics over a numeric dataset.
//!
//! Every value is computed with the basic algorithms of this crate: the
//! median goes through [`quicksort`], the standard deviation through
//! [`sqrt_newton`] and the mode through a [`FrequencyTable`].

use numtext_shared_kernel::{DomainError, DomainResult};
use serde::{Serialize, Serializer, ser::SerializeSeq};

use super::{
    frequency::{FrequencyTable, NumberKey},
    sort::quicksort,
};
use crate::numeric::sqrt::sqrt_newton;

/// Label used when every value occurs equally often.
pub const NO_UNIQUE_MODE: &str = "no unique mode";

/// Most frequent value(s) of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Every distinct value occurs with the same frequency (this includes
    /// datasets where all values are unique).
    NoUniqueMode,
    /// Exactly one value reaches the maximum frequency.
    Single(f64),
    /// Several, but not all, values tie for the maximum frequency; ascending.
    Multiple(Vec<f64>),
}

impl Mode {
    /// Values reported as the mode, in ascending order.
    pub fn values(&self) -> &[f64] {
        match self {
            Self::NoUniqueMode => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoUniqueMode => f.write_str(NO_UNIQUE_MODE),
            Self::Single(value) => write!(f, "{value}"),
            Self::Multiple(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoUniqueMode => serializer.serialize_str(NO_UNIQUE_MODE),
            Self::Single(value) => serializer.serialize_f64(*value),
            Self::Multiple(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

/// Summary of a non-empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Sample variance (divisor `n - 1`); `0` for a single value.
    pub variance: f64,
    pub std_deviation: f64,
}

/// Compute count, mean, median, mode, sample variance and standard deviation.
///
/// # Errors
/// [`DomainError::EmptyDataset`] when `data` is empty.
pub fn compute_statistics(data: &[f64]) -> DomainResult<Statistics> {
    let mean = mean(data)?;
    let median = median(data)?;
    let mode = mode(data)?;
    let variance = sample_variance(data, mean);
    let std_deviation = sqrt_newton(variance)?;

    log::debug!("computed statistics over {} values", data.len());

    Ok(Statistics {
        count: data.len(),
        mean,
        median,
        mode,
        variance,
        std_deviation,
    })
}

/// Arithmetic mean from a running sum.
pub fn mean(data: &[f64]) -> DomainResult<f64> {
    if data.is_empty() {
        return Err(DomainError::EmptyDataset);
    }
    let mut total = 0.0;
    let mut count = 0usize;
    for value in data {
        total += value;
        count += 1;
    }
    Ok(total / count as f64)
}

/// Middle value of the sorted data; the average of the two central values
/// for an even count.
pub fn median(data: &[f64]) -> DomainResult<f64> {
    if data.is_empty() {
        return Err(DomainError::EmptyDataset);
    }
    let sorted = quicksort(data);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

pub fn mode(data: &[f64]) -> DomainResult<Mode> {
    let table: FrequencyTable<NumberKey> = data.iter().copied().map(NumberKey::from).collect();
    let max = table.max_frequency().ok_or(DomainError::EmptyDataset)?;

    let candidates: Vec<f64> = table
        .keys_with_frequency(max)
        .into_iter()
        .map(|key| key.value())
        .collect();

    if candidates.len() == table.len() {
        return Ok(Mode::NoUniqueMode);
    }
    if let [single] = candidates.as_slice() {
        return Ok(Mode::Single(*single));
    }
    Ok(Mode::Multiple(quicksort(&candidates)))
}

/// Sum of squared deviations from `mean` divided by `n - 1`.
///
/// Reported as `0` when fewer than two values are present.
pub fn sample_variance(data: &[f64], mean: f64) -> f64 {
    let n = data.len();
    if n <= 1 {
        return 0.0;
    }
    let mut sum_squared_diff = 0.0;
    for value in data {
        let diff = value - mean;
        sum_squared_diff += diff * diff;
    }
    sum_squared_diff / (n - 1) as f64
}
