use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map},
    hash::{Hash, Hasher},
};

use numtext_shared_kernel::Frequency;

/// Occurrence counts keyed by value.
///
/// Keys are unique and every stored count is at least one. The table has no
/// ordering of its own; callers that present it impose one explicitly.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, Frequency>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self { counts: HashMap::new() }
    }
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key` and return its updated count.
    pub fn increment(&mut self, key: K) -> Frequency {
        let entry = self.counts.entry(key).or_insert(Frequency::zero());
        entry.increment();
        *entry
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Frequency>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> Frequency {
        self.counts.values().sum()
    }

    pub fn max_frequency(&self) -> Option<Frequency> {
        self.counts.values().copied().max()
    }

    /// Keys whose count equals `frequency`, in unspecified order.
    pub fn keys_with_frequency(&self, frequency: Frequency) -> Vec<&K> {
        self.counts
            .iter()
            .filter(|(_, count)| **count == frequency)
            .map(|(key, _)| key)
            .collect()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, Frequency> {
        self.counts.iter()
    }
}

impl<K> FromIterator<K> for FrequencyTable<K>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K> Extend<K> for FrequencyTable<K>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key);
        }
    }
}

impl<K> IntoIterator for FrequencyTable<K> {
    type Item = (K, Frequency);
    type IntoIter = hash_map::IntoIter<K, Frequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a FrequencyTable<K> {
    type Item = (&'a K, &'a Frequency);
    type IntoIter = hash_map::Iter<'a, K, Frequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// `f64` usable as a hash key.
///
/// Equality follows the bit pattern, except that `0.0` and `-0.0` collapse to
/// one key so that keys agree with numeric `==` for every non-NaN value.
#[derive(Debug, Clone, Copy)]
pub struct NumberKey(f64);

impl NumberKey {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    fn bits(self) -> u64 {
        if self.0 == 0.0 { 0 } else { self.0.to_bits() }
    }
}

impl From<f64> for NumberKey {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl PartialEq for NumberKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for NumberKey {}

impl Hash for NumberKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}
