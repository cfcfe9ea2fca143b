use crate::error::{AnalysisError, Result};
use crate::stopwords::StopWordSet;
use regex::Regex;

/// Turns one line of text into normalized tokens.
///
/// A token is lowercase, built only from the alphabet letters and `-`,
/// at least `min_token_length` characters long and not a stop word.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    foreign: Regex,
    stop_words: StopWordSet,
    min_token_length: usize,
}

impl Tokenizer {
    /// `alphabet` is the body of a regex character class, e.g. `а-яё`
    pub fn new(alphabet: &str, stop_words: StopWordSet, min_token_length: usize) -> Result<Self> {
        let foreign = Regex::new(&format!(r"[^{}\-]", alphabet)).map_err(|source| {
            AnalysisError::InvalidAlphabet {
                alphabet: alphabet.to_string(),
                source,
            }
        })?;

        Ok(Self {
            foreign,
            stop_words,
            min_token_length,
        })
    }

    /// Blank out everything outside the alphabet and split on whitespace
    fn tokenize(&self, line: &str) -> Vec<String> {
        let lowered = line.to_lowercase();
        self.foreign
            .replace_all(&lowered, " ")
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }

    /// Remove stopwords
    fn stopword_filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }

    /// Drop tokens shorter than the minimum, counted in characters
    fn length_filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| t.chars().count() >= self.min_token_length)
            .collect()
    }

    /// Full cleaning pipeline
    pub fn clean(&self, line: &str) -> Vec<String> {
        let tokens = self.tokenize(line);
        let tokens = self.length_filter(tokens);
        self.stopword_filter(tokens)
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new("а-яё", StopWordSet::from_list(&["очень", "был", "он"]), 3).unwrap()
    }

    #[test]
    fn test_clean_sentence() {
        let tokens = tokenizer().clean("Он был, конечно, очень скромный человек.");
        assert_eq!(tokens, vec!["конечно", "скромный", "человек"]);
    }

    #[test]
    fn test_strips_digits_latin_and_quotes() {
        let tokens = tokenizer().clean("«Кто виноват?» 1846 года, by Herzen");
        assert_eq!(tokens, vec!["кто", "виноват", "года"]);
    }

    #[test]
    fn test_keeps_internal_hyphen_and_yo() {
        let tokens = tokenizer().clean("Кто-нибудь ЕЩЁ — по-моему");
        assert_eq!(tokens, vec!["кто-нибудь", "ещё", "по-моему"]);
    }

    #[test]
    fn test_length_counts_characters() {
        // "дом" is six bytes but three characters
        let tokens = tokenizer().clean("да дом");
        assert_eq!(tokens, vec!["дом"]);
    }

    #[test]
    fn test_empty_and_punctuation_lines() {
        let tokenizer = tokenizer();
        assert!(tokenizer.clean("").is_empty());
        assert!(tokenizer.clean("  ... !!! ,,, 42 ").is_empty());
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let tokenizer = tokenizer();
        let line = "Он был, конечно, очень скромный человек; а Круциферский — нет!";
        let once = tokenizer.clean(line);
        let twice = tokenizer.clean(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_never_contains_stop_words() {
        let tokenizer = tokenizer();
        for token in tokenizer.clean("ОЧЕНЬ очень Очень хороший он ОН был") {
            assert!(!tokenizer.stop_words().contains(&token));
            assert!(token.chars().count() >= tokenizer.min_token_length());
        }
    }

    #[test]
    fn test_invalid_alphabet() {
        let err = Tokenizer::new("z-a", StopWordSet::empty(), 3).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidAlphabet { .. }));
    }
}
