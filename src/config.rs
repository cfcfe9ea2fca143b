use crate::error::{AnalysisError, Result};
use crate::stemmer::{SnowballStemmer, WordStemmer};
use crate::stopwords::StopWordSet;
use rust_stemmers::Algorithm;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Language of the analysed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    pub fn algorithm(self) -> Algorithm {
        match self {
            Language::Russian => Algorithm::Russian,
            Language::English => Algorithm::English,
        }
    }

    pub fn stop_words_language(self) -> stop_words::LANGUAGE {
        match self {
            Language::Russian => stop_words::LANGUAGE::Russian,
            Language::English => stop_words::LANGUAGE::English,
        }
    }

    /// Regex character-class body of the letters a token may contain
    pub fn default_alphabet(self) -> &'static str {
        match self {
            Language::Russian => "а-яё",
            Language::English => "a-z",
        }
    }
}

impl FromStr for Language {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ru" | "russian" => Ok(Language::Russian),
            "en" | "english" => Ok(Language::English),
            other => Err(AnalysisError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Russian => write!(f, "russian"),
            Language::English => write!(f, "english"),
        }
    }
}

/// Sizes of the ranked lists in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    pub top_n: usize,
    pub rare_n: usize,
    /// Entries below this count never appear in the rare list
    pub min_count: u64,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            top_n: 50,
            rare_n: 50,
            min_count: 2,
        }
    }
}

/// Everything a pipeline run needs, resolved once up front
pub struct PipelineConfig {
    pub alphabet: String,
    pub stop_words: StopWordSet,
    pub min_token_length: usize,
    pub stemmer: Arc<dyn WordStemmer>,
    pub ranking: RankingOptions,
    /// Worker threads; 0 uses one per core
    pub threads: usize,
}

impl PipelineConfig {
    /// Defaults for `language`: its alphabet, corpus stop words and Snowball stemmer
    pub fn new(language: Language) -> Self {
        Self {
            alphabet: language.default_alphabet().to_string(),
            stop_words: StopWordSet::for_language(language),
            min_token_length: 3,
            stemmer: Arc::new(SnowballStemmer::new(language)),
            ranking: RankingOptions::default(),
            threads: 0,
        }
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWordSet) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    pub fn with_stemmer<S: WordStemmer + 'static>(mut self, stemmer: S) -> Self {
        self.stemmer = Arc::new(stemmer);
        self
    }

    pub fn with_ranking(mut self, ranking: RankingOptions) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

/// User-facing settings, read from a JSON file and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub language: String,
    /// Overrides the language's default alphabet
    pub alphabet: Option<String>,
    pub min_token_length: usize,
    pub extra_stop_words: Vec<String>,
    /// Replaces the built-in corpus for the language
    pub stop_words_file: Option<PathBuf>,
    pub top_n: usize,
    pub rare_n: usize,
    pub min_count: u64,
    pub detect_prefix_bytes: usize,
    pub threads: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let ranking = RankingOptions::default();
        Self {
            language: Language::Russian.to_string(),
            alphabet: None,
            min_token_length: 3,
            extra_stop_words: Vec::new(),
            stop_words_file: None,
            top_n: ranking.top_n,
            rare_n: ranking.rare_n,
            min_count: ranking.min_count,
            detect_prefix_bytes: crate::document::DEFAULT_DETECT_PREFIX,
            threads: 0,
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AnalysisError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn language(&self) -> Result<Language> {
        self.language.parse()
    }

    /// Resolve into a pipeline configuration, loading the stop-word list
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let language = self.language()?;

        let mut stop_words = match &self.stop_words_file {
            Some(path) => StopWordSet::from_file(path)?,
            None => StopWordSet::for_language(language),
        };
        stop_words.extend(&self.extra_stop_words);

        let mut config = PipelineConfig::new(language)
            .with_stop_words(stop_words)
            .with_min_token_length(self.min_token_length)
            .with_ranking(RankingOptions {
                top_n: self.top_n,
                rare_n: self.rare_n,
                min_count: self.min_count,
            })
            .with_threads(self.threads);
        if let Some(alphabet) = &self.alphabet {
            config = config.with_alphabet(alphabet.clone());
        }

        tracing::debug!(
            %language,
            alphabet = %config.alphabet,
            stop_words = config.stop_words.len(),
            "resolved pipeline configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_language_parse() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Russian);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(AnalysisError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.language().unwrap(), Language::Russian);
        assert_eq!(settings.min_token_length, 3);
        assert_eq!(settings.top_n, 50);
        assert_eq!(settings.min_count, 2);
        assert_eq!(settings.detect_prefix_bytes, 20_000);
    }

    #[test]
    fn test_partial_settings_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_n": 10, "extra_stop_words": ["барин"]}}"#).unwrap();

        let settings = Settings::from_file(file.path())?;
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.rare_n, 50);

        let config = settings.pipeline_config()?;
        assert!(config.stop_words.contains("барин"));
        assert!(config.stop_words.contains("очень"));
        assert_eq!(config.ranking.top_n, 10);
        assert_eq!(config.alphabet, "а-яё");
        Ok(())
    }

    #[test]
    fn test_unknown_setting_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top": 10}}"#).unwrap();

        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::Settings { .. }));
    }

    #[test]
    fn test_unsupported_language_in_settings() {
        let settings = Settings {
            language: "latin".to_string(),
            ..Settings::default()
        };
        assert!(settings.pipeline_config().is_err());
    }
}
