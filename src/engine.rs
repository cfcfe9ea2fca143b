use crate::config::{PipelineConfig, RankingOptions};
use crate::document::Document;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::report::{AnalysisReport, VocabularyStats};
use crate::stemmer::WordStemmer;
use crate::tokenizer::Tokenizer;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Word-frequency pipeline: clean, count, stem, count again
pub struct Pipeline {
    tokenizer: Tokenizer,
    stemmer: Arc<dyn WordStemmer>,
    ranking: RankingOptions,
    pool: rayon::ThreadPool,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(&config.alphabet, config.stop_words, config.min_token_length)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;

        tracing::debug!(
            threads = pool.current_num_threads(),
            stop_words = tokenizer.stop_words().len(),
            "pipeline ready"
        );

        Ok(Self {
            tokenizer,
            stemmer: config.stemmer,
            ranking: config.ranking,
            pool,
        })
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Clean every line; tokens keep document order
    pub fn clean(&self, document: &Document) -> Vec<String> {
        self.pool.install(|| {
            document
                .lines()
                .par_iter()
                .flat_map_iter(|line| self.tokenizer.clean(line))
                .collect()
        })
    }

    /// Count tokens, folding per-worker tables and merging them
    pub fn count(&self, tokens: &[String]) -> FrequencyTable {
        self.pool.install(|| {
            tokens
                .par_iter()
                .fold(FrequencyTable::new, |mut table, token| {
                    table.add(token);
                    table
                })
                .reduce(FrequencyTable::new, FrequencyTable::merged)
        })
    }

    /// Stem every token and count the stems
    pub fn count_stems(&self, tokens: &[String]) -> FrequencyTable {
        let stemmer = &self.stemmer;
        self.pool.install(|| {
            tokens
                .par_iter()
                .fold(FrequencyTable::new, |mut table, token| {
                    table.add(&stemmer.stem(token));
                    table
                })
                .reduce(FrequencyTable::new, FrequencyTable::merged)
        })
    }

    /// Run the whole pipeline over a loaded document
    pub fn analyze(&self, document: &Document) -> AnalysisReport {
        let start = Instant::now();
        let RankingOptions {
            top_n,
            rare_n,
            min_count,
        } = self.ranking;

        let tokens = self.clean(document);
        let words = self.count(&tokens);
        tracing::info!(
            lines = document.line_count(),
            total = words.total(),
            unique = words.unique(),
            "counted words"
        );

        let stems = self.count_stems(&tokens);
        tracing::info!(
            total = stems.total(),
            unique = stems.unique(),
            "counted stems"
        );

        let report = AnalysisReport::new(
            document.encoding_name(),
            min_count,
            VocabularyStats::from_table(&words, top_n, rare_n, min_count),
            VocabularyStats::from_table(&stems, top_n, rare_n, min_count),
        );
        tracing::debug!(elapsed = ?start.elapsed(), "analysis finished");
        report
    }

    /// Analyze text that is already decoded
    pub fn analyze_text(&self, text: &str) -> AnalysisReport {
        self.analyze(&Document::from_text(text))
    }
}
