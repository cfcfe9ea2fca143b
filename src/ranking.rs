use std::cmp::Ordering;
use std::fmt;

/// One row of a ranked list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub term: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(term: impl Into<String>, count: u64) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Width comes from the caller, e.g. `{:<15}`
        let width = f.width().unwrap_or(0);
        write!(f, "{:<width$} → {}", self.term, self.count, width = width)
    }
}

/// Highest count first, ties alphabetical
fn by_count_desc(a: &(&str, u64), b: &(&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Lowest count first, ties alphabetical
fn by_count_asc(a: &(&str, u64), b: &(&str, u64)) -> Ordering {
    a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0))
}

/// Keep the first `n` entries under `cmp` without sorting the whole vocabulary
fn take_ranked<F>(mut entries: Vec<(&str, u64)>, n: usize, cmp: F) -> Vec<RankedEntry>
where
    F: Fn(&(&str, u64), &(&str, u64)) -> Ordering,
{
    if n == 0 || entries.is_empty() {
        return Vec::new();
    }
    if n < entries.len() {
        entries.select_nth_unstable_by(n - 1, &cmp);
        entries.truncate(n);
    }
    entries.sort_unstable_by(&cmp);

    entries
        .into_iter()
        .map(|(term, count)| RankedEntry::new(term, count))
        .collect()
}

/// Rank entries by descending count
pub fn most_frequent<'a, I>(entries: I, n: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    take_ranked(entries.into_iter().collect(), n, by_count_desc)
}

/// Rank entries with at least `min_count` occurrences by ascending count
pub fn least_frequent<'a, I>(entries: I, n: usize, min_count: u64) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let eligible = entries
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .collect();
    take_ranked(eligible, n, by_count_asc)
}
