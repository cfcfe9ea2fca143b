use crate::config::Language;
use rust_stemmers::Stemmer;
use std::borrow::Cow;

/// Deterministic reduction of a token to its stem
pub trait WordStemmer: Send + Sync {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Snowball stemmer for one language
pub struct SnowballStemmer {
    stemmer: Stemmer,
    language: Language,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        Self {
            stemmer: Stemmer::create(language.algorithm()),
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl WordStemmer for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.stemmer.stem(word)
    }
}

/// Leaves every token unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl WordStemmer for IdentityStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}

impl<F> WordStemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(word))
    }
}
