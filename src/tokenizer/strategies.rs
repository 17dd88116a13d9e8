// src/tokenizer/strategies.rs

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::TokenizationStrategy;

lazy_static! {
    static ref WORD_BOUNDARY: Regex = Regex::new(r"[\s.!?؟]+").unwrap();
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?؟]+").unwrap();
}

/// Parameters a strategy may need besides the text itself.
#[derive(Debug, Clone, Copy)]
pub struct SplitParams<'a> {
    pub ngram_size: usize,
    pub pattern: Option<&'a Regex>,
}

pub fn split(strategy: TokenizationStrategy, text: &str, params: SplitParams<'_>) -> Vec<String> {
    match strategy {
        TokenizationStrategy::Word => split_words(text),
        TokenizationStrategy::Sentence => split_sentences(text),
        TokenizationStrategy::Character => split_characters(text),
        TokenizationStrategy::Whitespace => split_whitespace(text),
        TokenizationStrategy::NGram => split_ngrams(text, params.ngram_size),
        TokenizationStrategy::Custom => match params.pattern {
            Some(pattern) => split_pattern(text, pattern),
            None => split_words(text),
        },
    }
}

pub fn split_words(text: &str) -> Vec<String> {
    WORD_BOUNDARY
        .split(text)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn split_characters(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(String::from)
        .collect()
}

pub fn split_whitespace(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Sliding window of `n` words with stride 1. Text shorter than `n` words
/// comes back whole as a single token.
pub fn split_ngrams(text: &str, n: usize) -> Vec<String> {
    let words = split_words(text);
    if words.is_empty() {
        return Vec::new();
    }
    if words.len() < n {
        return vec![text.trim().to_string()];
    }
    words.windows(n.max(1)).map(|window| window.join(" ")).collect()
}

pub fn split_pattern(text: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_split_on_sentence_punctuation() {
        assert_eq!(split_words("Hello world. How are you?"), vec!["Hello", "world", "How", "are", "you"]);
        assert_eq!(split_words("  كيف حالك؟ بخير"), vec!["كيف", "حالك", "بخير"]);
        assert_eq!(split_words("a,b"), vec!["a,b"]);
    }

    #[test]
    fn test_sentences() {
        assert_eq!(
            split_sentences("First one. Second!! Third? ... "),
            vec!["First one", "Second", "Third"]
        );
        assert_eq!(split_sentences("مرحبا. كيف الحال؟"), vec!["مرحبا", "كيف الحال"]);
    }

    #[test]
    fn test_characters_skip_whitespace() {
        assert_eq!(split_characters("a b\tc"), vec!["a", "b", "c"]);
        assert_eq!(split_characters("سلم"), vec!["س", "ل", "م"]);
    }

    #[test]
    fn test_ngrams() {
        assert_eq!(split_ngrams("one two three", 2), vec!["one two", "two three"]);
        assert_eq!(
            split_ngrams("one two three four", 3),
            vec!["one two three", "two three four"]
        );
        assert_eq!(split_ngrams(" one two ", 3), vec!["one two"]);
        assert!(split_ngrams("   ", 2).is_empty());
    }

    #[test]
    fn test_custom_pattern_and_fallback() {
        let digits = Regex::new(r"\d+").unwrap();
        let params = SplitParams { ngram_size: 2, pattern: Some(&digits) };
        assert_eq!(split(TokenizationStrategy::Custom, "a1 b22 c333", params), vec!["1", "22", "333"]);

        let params = SplitParams { ngram_size: 2, pattern: None };
        assert_eq!(split(TokenizationStrategy::Custom, "a b", params), vec!["a", "b"]);
    }
}
