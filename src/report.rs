use crate::frequency::FrequencyTable;
use crate::ranking::RankedEntry;
use std::fmt;

const WORD_WIDTH: usize = 15;
const STEM_WIDTH: usize = 12;

/// Counts and ranked lists for one vocabulary (surface words or stems)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyStats {
    pub total: u64,
    pub unique: usize,
    pub top: Vec<RankedEntry>,
    pub rare: Vec<RankedEntry>,
}

impl VocabularyStats {
    pub fn from_table(table: &FrequencyTable, top_n: usize, rare_n: usize, min_count: u64) -> Self {
        Self {
            total: table.total(),
            unique: table.unique(),
            top: table.top(top_n),
            rare: table.rare(rare_n, min_count),
        }
    }
}

/// Result of one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub encoding: String,
    pub min_count: u64,
    pub words: VocabularyStats,
    pub stems: VocabularyStats,
    /// Unique words minus unique stems
    pub vocabulary_reduction: usize,
}

impl AnalysisReport {
    pub fn new(encoding: impl Into<String>, min_count: u64, words: VocabularyStats, stems: VocabularyStats) -> Self {
        let vocabulary_reduction = words.unique.saturating_sub(stems.unique);
        Self {
            encoding: encoding.into(),
            min_count,
            words,
            stems,
            vocabulary_reduction,
        }
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[RankedEntry], width: usize) -> fmt::Result {
    for entry in entries {
        writeln!(f, "{:<width$}", entry, width = width)?;
    }
    Ok(())
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Detected encoding: {}", self.encoding)?;
        writeln!(f)?;
        writeln!(
            f,
            "After cleaning: {} words, {} unique",
            self.words.total, self.words.unique
        )?;
        writeln!(f)?;

        writeln!(f, "Top {} most frequent words:", self.words.top.len())?;
        write_entries(f, &self.words.top, WORD_WIDTH)?;
        writeln!(f)?;
        writeln!(
            f,
            "Top {} least frequent words (≥{} occurrences):",
            self.words.rare.len(),
            self.min_count
        )?;
        write_entries(f, &self.words.rare, WORD_WIDTH)?;
        writeln!(f)?;

        writeln!(f, "Top {} after stemming:", self.stems.top.len())?;
        write_entries(f, &self.stems.top, STEM_WIDTH)?;
        writeln!(f)?;
        writeln!(
            f,
            "Top {} rare stems (≥{} occurrences):",
            self.stems.rare.len(),
            self.min_count
        )?;
        write_entries(f, &self.stems.rare, STEM_WIDTH)?;
        writeln!(f)?;

        writeln!(
            f,
            "After stemming: {} words, {} unique",
            self.stems.total, self.stems.unique
        )?;
        writeln!(
            f,
            "Unique words decreased by {}",
            self.vocabulary_reduction
        )
    }
}
