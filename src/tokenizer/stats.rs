// src/tokenizer/stats.rs

use ahash::{AHashMap, AHashSet};

use crate::parser;
use crate::types::TextStatistics;
use super::Tokenizer;

const TOP_TOKENS: usize = 10;

impl Tokenizer {
    pub fn count_tokens(&mut self, text: &str) -> usize {
        self.tokenize(text).len()
    }

    /// Distinct tokens in order of first occurrence.
    pub fn unique_tokens(&mut self, text: &str) -> Vec<String> {
        let mut seen = AHashSet::new();
        self.tokenize(text)
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }

    pub fn token_frequency(&mut self, text: &str) -> AHashMap<String, usize> {
        frequency_of(&self.tokenize(text))
    }

    /// The `n` most frequent tokens, ties broken alphabetically.
    pub fn top_tokens(&mut self, text: &str, n: usize) -> Vec<(String, usize)> {
        ranked(&self.token_frequency(text), n)
    }

    pub fn get_statistics(&mut self, text: &str) -> TextStatistics {
        let tokens = self.tokenize(text);
        let frequency = frequency_of(&tokens);

        let total_tokens = tokens.len();
        let unique_tokens = frequency.len();
        let token_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        let (average_token_length, lexical_diversity) = if total_tokens == 0 {
            (0.0, 0.0)
        } else {
            (
                token_chars as f64 / total_tokens as f64,
                unique_tokens as f64 / total_tokens as f64,
            )
        };

        TextStatistics {
            total_tokens,
            unique_tokens,
            total_characters: text.chars().count(),
            average_token_length,
            lexical_diversity,
            language: parser::detect_language(text),
            top_tokens: ranked(&frequency, TOP_TOKENS),
            frequency,
        }
    }
}

fn frequency_of(tokens: &[String]) -> AHashMap<String, usize> {
    let mut freqs = AHashMap::new();
    for token in tokens {
        *freqs.entry(token.clone()).or_insert(0) += 1;
    }
    freqs
}

fn ranked(frequency: &AHashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = frequency
        .iter()
        .map(|(token, count)| (token.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use crate::parser::Language;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn test_counts_and_uniques() {
        let mut t = Tokenizer::with_defaults();
        assert_eq!(t.count_tokens("a b a c b a"), 6);
        assert_eq!(t.unique_tokens("a b a c b a"), vec!["a", "b", "c"]);
        assert_eq!(t.count_tokens(""), 0);
    }

    #[test]
    fn test_frequency_and_top_tokens() {
        let mut t = Tokenizer::with_defaults();
        let freq = t.token_frequency("x y x z x y");
        assert_eq!(freq["x"], 3);
        assert_eq!(freq["y"], 2);
        assert_eq!(freq["z"], 1);
        assert_eq!(
            t.top_tokens("b a b a c", 2),
            vec![("a".to_string(), 2), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn test_statistics() {
        let mut t = Tokenizer::with_defaults();
        let stats = t.get_statistics("the cat the dog");
        assert_eq!(stats.total_tokens, 4);
        assert_eq!(stats.unique_tokens, 3);
        assert_eq!(stats.total_characters, 15);
        assert!((stats.average_token_length - 3.0).abs() < 1e-9);
        assert!((stats.lexical_diversity - 0.75).abs() < 1e-9);
        assert_eq!(stats.language, Language::English);
        assert_eq!(stats.top_tokens[0], ("the".to_string(), 2));
    }

    #[test]
    fn test_statistics_of_empty_text() {
        let mut t = Tokenizer::with_defaults();
        let stats = t.get_statistics("");
        assert_eq!(stats.total_tokens, 0);
        assert_eq!(stats.lexical_diversity, 0.0);
        assert_eq!(stats.language, Language::Unknown);
        assert!(stats.frequency.is_empty());
    }
}
