use std::time::Instant;

use numtext_domain::{WordFrequencyCounter, compute_statistics, convert, sorted_words};
use numtext_ports::source::{LineSource, SourceLine};
use numtext_shared_kernel::{ErrorContext, Result};

use crate::{
    dto::{
        ConversionOutput, NumberConversion, StatisticsOutput, WordCountOutput, WordFrequency,
    },
    parse::{parse_integer, parse_lines, parse_number},
};

fn read_all(source: &dyn LineSource) -> Result<Vec<SourceLine>> {
    source.read_lines().with_context(|| format!("reading {}", source.describe()))
}

/// Descriptive statistics over the numbers of one input.
pub struct ComputeStatistics<'a> {
    source: &'a dyn LineSource,
}

impl<'a> ComputeStatistics<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    /// # Errors
    /// Fails when the input cannot be read or holds no valid number.
    pub fn run(&self) -> Result<StatisticsOutput> {
        let started = Instant::now();
        let lines = read_all(self.source)?;
        let parsed = parse_lines(&lines, parse_number);

        let statistics = compute_statistics(&parsed.values).with_context(|| {
            format!("no valid numbers found in {}", self.source.describe())
        })?;

        Ok(StatisticsOutput {
            source: self.source.describe(),
            statistics,
            rejected: parsed.rejected,
            elapsed: started.elapsed(),
        })
    }
}

/// Binary and hexadecimal renderings of the integers of one input.
pub struct ConvertNumbers<'a> {
    source: &'a dyn LineSource,
}

impl<'a> ConvertNumbers<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    /// # Errors
    /// Fails when the input cannot be read.
    pub fn run(&self) -> Result<ConversionOutput> {
        let started = Instant::now();
        let lines = read_all(self.source)?;
        let parsed = parse_lines(&lines, parse_integer);

        let conversions: Vec<NumberConversion> = parsed
            .values
            .into_iter()
            .enumerate()
            .map(|(i, value)| NumberConversion { index: i + 1, result: convert(value) })
            .collect();
        log::debug!("converted {} integers", conversions.len());

        Ok(ConversionOutput {
            source: self.source.describe(),
            conversions,
            rejected: parsed.rejected,
            elapsed: started.elapsed(),
        })
    }
}

/// Case-insensitive word frequencies of one input.
pub struct CountWords<'a> {
    source: &'a dyn LineSource,
}

impl<'a> CountWords<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    /// # Errors
    /// Fails when the input cannot be read.
    pub fn run(&self) -> Result<WordCountOutput> {
        let started = Instant::now();
        let lines = read_all(self.source)?;

        let mut counter = WordFrequencyCounter::new();
        let mut total_words = 0;
        for line in &lines {
            total_words += counter.add_line(&line.text);
        }

        let table = counter.finish();
        let words: Vec<WordFrequency> = sorted_words(&table)
            .into_iter()
            .map(|(word, frequency)| WordFrequency { word, frequency })
            .collect();
        log::debug!("counted {total_words} words, {} distinct", words.len());

        Ok(WordCountOutput {
            source: self.source.describe(),
            total_words,
            distinct_words: words.len(),
            words,
            elapsed: started.elapsed(),
        })
    }
}
