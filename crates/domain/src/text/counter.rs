use numtext_shared_kernel::Frequency;

use super::tokenizer::{WordToken, tokenize};
use crate::analytics::frequency::FrequencyTable;

/// Lower-case ASCII `A`–`Z`; every other character is kept as-is.
pub fn fold_ascii(word: &str) -> String {
    word.chars()
        .map(|ch| if ch.is_ascii_uppercase() { char::from(ch as u8 + 32) } else { ch })
        .collect()
}

/// Accumulates case-folded word counts across any number of lines.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyCounter {
    table: FrequencyTable<String>,
}

impl WordFrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: WordToken<'_>) {
        self.table.increment(fold_ascii(token.as_str()));
    }

    /// Tokenize `line` and count every token; returns how many were seen.
    pub fn add_line(&mut self, line: &str) -> usize {
        let tokens = tokenize(line);
        let seen = tokens.len();
        for token in tokens {
            self.add(token);
        }
        seen
    }

    pub fn finish(self) -> FrequencyTable<String> {
        self.table
    }
}

impl<'a> Extend<WordToken<'a>> for WordFrequencyCounter {
    fn extend<I: IntoIterator<Item = WordToken<'a>>>(&mut self, iter: I) {
        for token in iter {
            self.add(token);
        }
    }
}

/// Count case-folded tokens into a fresh table.
pub fn count<'a, I>(tokens: I) -> FrequencyTable<String>
where
    I: IntoIterator<Item = WordToken<'a>>,
{
    let mut counter = WordFrequencyCounter::new();
    counter.extend(tokens);
    counter.finish()
}

/// Table entries ordered lexicographically by code point.
///
/// Uses a pairwise exchange sort (O(n²)) over the keys.
pub fn sorted_words(table: &FrequencyTable<String>) -> Vec<(String, Frequency)> {
    let mut entries: Vec<(String, Frequency)> =
        table.iter().map(|(word, freq)| (word.clone(), *freq)).collect();

    let n = entries.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if entries[j].0 > entries[j + 1].0 {
                entries.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    entries
}
