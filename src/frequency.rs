use crate::ranking::{self, RankedEntry};
use std::collections::HashMap;

/// Occurrence counts keyed by token (or stem)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token once
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    /// Record one occurrence of `token`
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_owned(), 1);
            }
        }
        self.total += 1;
    }

    /// Add another table's counts into this one
    pub fn merge(&mut self, mut other: FrequencyTable) {
        if other.counts.len() > self.counts.len() {
            std::mem::swap(self, &mut other);
        }
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// By-value [`FrequencyTable::merge`], for use as a reduce step
    pub fn merged(mut self, other: FrequencyTable) -> Self {
        self.merge(other);
        self
    }

    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct keys
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// The `n` most frequent entries, highest count first
    pub fn top(&self, n: usize) -> Vec<RankedEntry> {
        ranking::most_frequent(self.iter(), n)
    }

    /// The `n` least frequent entries among those seen at least `min_count` times
    pub fn rare(&self, n: usize, min_count: u64) -> Vec<RankedEntry> {
        ranking::least_frequent(self.iter(), n, min_count)
    }
}
