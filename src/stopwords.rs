use crate::config::Language;
use crate::error::{AnalysisError, Result};
use std::collections::HashSet;
use std::path::Path;

lazy_static::lazy_static! {
    /// Tokens that survive the corpus list but carry no meaning in literary prose:
    /// punctuation artifacts and generic pronouns/adverbs.
    static ref EXTRA_STOPWORDS: HashSet<&'static str> = {
        ["это", "еще", "очень", "весь", "такой", "который", "—", "«", "»", "..."]
            .iter()
            .copied()
            .collect()
    };
}

/// Read-only set of words excluded from frequency counts
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// NLTK list for `language` plus the built-in extras
    pub fn for_language(language: Language) -> Self {
        let mut set: Self = stop_words::get(language.stop_words_language())
            .iter()
            .map(|s| s.to_string())
            .collect();
        set.extend(EXTRA_STOPWORDS.iter().copied());
        set
    }

    /// Load a word list (one word per line, `#` starts a comment) plus the built-in extras
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::StopWords {
            path: path.to_path_buf(),
            source,
        })?;

        let mut set: Self = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|word| !word.is_empty())
            .collect();
        set.extend(EXTRA_STOPWORDS.iter().copied());

        tracing::debug!(path = %path.display(), words = set.len(), "loaded stop-word file");
        Ok(set)
    }

    /// Exactly the given words, without the built-in extras
    pub fn from_list(words: &[&str]) -> Self {
        words.iter().copied().collect()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }
}

impl<S: AsRef<str>> Extend<S> for StopWordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words
            .extend(iter.into_iter().map(|w| w.as_ref().to_lowercase()));
    }
}
