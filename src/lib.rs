// Re-export main components
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod ranking;
pub mod report;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{Language, PipelineConfig, RankingOptions, Settings};
pub use document::Document;
pub use engine::Pipeline;
pub use error::{AnalysisError, Result};
pub use frequency::FrequencyTable;
pub use ranking::RankedEntry;
pub use report::{AnalysisReport, VocabularyStats};
pub use stemmer::{IdentityStemmer, SnowballStemmer, WordStemmer};
pub use stopwords::StopWordSet;
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() -> Result<()> {
        let pipeline = Pipeline::new(PipelineConfig::new(Language::Russian))?;

        let report = pipeline.analyze_text(
            "Он был, конечно, очень скромный человек.\n\
             Скромный человек жил в небольшом доме, и люди любили этого человека.",
        );

        let stop_words = StopWordSet::for_language(Language::Russian);
        assert_eq!(report.encoding, "UTF-8");
        assert!(report.words.total >= report.words.unique as u64);
        assert!(report.words.unique >= report.stems.unique);
        assert_eq!(report.words.total, report.stems.total);
        assert!(report.words.top.iter().all(|e| !stop_words.contains(&e.term)));

        Ok(())
    }
}
