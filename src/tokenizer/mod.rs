pub mod cache;
pub mod stats;
pub mod stop_words;
pub mod strategies;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::config::{Preset, TokenizerConfig};
use crate::matcher::SimilarityCalculator;
use crate::parser::{self, ArabicNormalizer, ArabicStemmer, Language};
use crate::types::{CacheStats, NumberExtraction, Token};

pub use self::cache::BoundedCache;
pub use self::stop_words::StopWordSet;
pub use self::strategies::SplitParams;

lazy_static! {
    // Anything that is not a word character, whitespace or in the Arabic block
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s\u{0600}-\u{06FF}]").unwrap();
}

/// The tokenization engine.
///
/// Owns an immutable [`TokenizerConfig`] plus private mutable caches. Every
/// call runs synchronously on the caller's thread. Methods that may touch the
/// caches take `&mut self`; share an instance across threads only behind a
/// lock.
pub struct Tokenizer {
    config: TokenizerConfig,
    normalizer: ArabicNormalizer,
    stemmer: ArabicStemmer,
    stop_words: StopWordSet,
    token_cache: BoundedCache<String, Vec<String>>,
    pub(crate) calculator: SimilarityCalculator,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        let stop_words = if config.stopwords().is_empty() {
            StopWordSet::built_in()
        } else {
            StopWordSet::from_words(config.stopwords().iter())
        };
        debug!(
            "Creating tokenizer: {} ({} stopwords active)",
            config.describe(),
            stop_words.len()
        );

        Self {
            token_cache: BoundedCache::new(config.cache_capacity()),
            calculator: SimilarityCalculator::new(&config),
            normalizer: ArabicNormalizer::new(),
            stemmer: ArabicStemmer::new(),
            stop_words,
            config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(TokenizerConfig::default())
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(TokenizerConfig::preset(preset))
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Splits `text` into tokens, consulting the token cache when enabled.
    pub fn tokenize(&mut self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        if !self.config.caching() {
            return self.tokenize_uncached(text);
        }

        if let Some(tokens) = self.token_cache.get(&text.to_string()) {
            trace!("Token cache hit for text of {} bytes", text.len());
            return tokens.clone();
        }

        trace!("Token cache miss for text of {} bytes", text.len());
        let tokens = self.tokenize_uncached(text);
        self.token_cache.insert(text.to_string(), tokens.clone());
        tokens
    }

    /// The full pipeline without any cache involvement.
    pub fn tokenize_uncached(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let language = parser::detect_language(text);

        let mut prepared = if self.config.normalize_arabic() && language.has_arabic() {
            self.normalizer.normalize(text)
        } else {
            text.to_string()
        };
        if self.config.lowercase() {
            prepared = prepared.to_lowercase();
        }

        let params = SplitParams {
            ngram_size: self.config.ngram_size(),
            pattern: self.config.custom_pattern(),
        };
        let mut tokens = strategies::split(self.config.strategy(), &prepared, params);

        if self.config.remove_punctuation() {
            tokens = tokens
                .into_iter()
                .map(|t| PUNCTUATION.replace_all(&t, "").into_owned())
                .filter(|t| !t.is_empty())
                .collect();
        }

        if self.config.stemming() && language == Language::Arabic {
            tokens = tokens.iter().map(|t| self.stemmer.stem(t)).collect();
        }

        if self.config.remove_stopwords() {
            tokens.retain(|t| !self.stop_words.contains(t));
        }

        tokens
    }

    pub fn tokenize_with_positions(&mut self, text: &str) -> Vec<Token> {
        self.tokenize(text)
            .into_iter()
            .enumerate()
            .map(|(position, value)| Token { value, position })
            .collect()
    }

    pub fn tokenize_batch<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.tokenize(t.as_ref())).collect()
    }

    pub fn detokenize<S: AsRef<str>>(&self, tokens: &[S], separator: &str) -> String {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn detect_language(&self, text: &str) -> Language {
        parser::detect_language(text)
    }

    pub fn normalize_arabic_text(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    pub fn arabic_to_english_numbers(&self, text: &str) -> String {
        parser::arabic_to_english_numbers(text)
    }

    pub fn english_to_arabic_numbers(&self, text: &str) -> String {
        parser::english_to_arabic_numbers(text)
    }

    pub fn extract_numbers(&self, text: &str) -> NumberExtraction {
        parser::extract_numbers(text)
    }

    pub fn clear_cache(&mut self) {
        debug!(
            "Clearing caches ({} token entries, {} similarity entries)",
            self.token_cache.len(),
            self.calculator.cache_len()
        );
        self.token_cache.clear();
        self.calculator.clear_cache();
    }

    pub fn get_cache_stats(&self) -> CacheStats {
        CacheStats {
            enabled: self.config.caching(),
            capacity: self.config.cache_capacity(),
            token_entries: self.token_cache.len(),
            similarity_entries: self.calculator.cache_len(),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenizationStrategy;

    fn tokenizer(builder: crate::config::ConfigBuilder) -> Tokenizer {
        Tokenizer::new(builder.build().unwrap())
    }

    #[test]
    fn test_empty_input_under_every_strategy() {
        for strategy in [
            TokenizationStrategy::Word,
            TokenizationStrategy::Sentence,
            TokenizationStrategy::Character,
            TokenizationStrategy::Whitespace,
            TokenizationStrategy::NGram,
            TokenizationStrategy::Custom,
        ] {
            let mut t = tokenizer(TokenizerConfig::builder().strategy(strategy).custom_pattern(r"\w+"));
            assert!(t.tokenize("").is_empty(), "{:?}", strategy);
        }
    }

    #[test]
    fn test_default_pipeline_normalizes_arabic() {
        let mut t = Tokenizer::with_defaults();
        assert_eq!(t.tokenize("أَلسَّلامُ عَلَيْكُمْ"), vec!["السلام", "عليكم"]);
        // English text is left alone, no lowercasing by default
        assert_eq!(t.tokenize("Hello World"), vec!["Hello", "World"]);
    }

    #[test]
    fn test_normalization_disabled() {
        let mut t = tokenizer(TokenizerConfig::builder().normalize_arabic(false));
        assert_eq!(t.tokenize("مدرسة"), vec!["مدرسة"]);
    }

    #[test]
    fn test_punctuation_and_lowercase() {
        let mut t = tokenizer(TokenizerConfig::builder().lowercase(true).remove_punctuation(true));
        assert_eq!(t.tokenize("Hello, World! (yes)"), vec!["hello", "world", "yes"]);
        assert_eq!(t.tokenize("-- , --"), Vec::<String>::new());
    }

    #[test]
    fn test_stopwords_built_in_and_explicit() {
        let mut t = tokenizer(TokenizerConfig::builder().remove_stopwords(true));
        assert_eq!(t.tokenize("The cat is on the mat"), vec!["cat", "mat"]);
        assert_eq!(t.tokenize("ذهبت إلى المدرسة"), vec!["ذهبت", "المدرسه"]);

        let mut t = tokenizer(TokenizerConfig::builder().remove_stopwords(true).stopwords(["cat"]));
        assert_eq!(t.tokenize("The cat sat"), vec!["The", "sat"]);
    }

    #[test]
    fn test_stemming_only_for_arabic_text() {
        let mut t = tokenizer(TokenizerConfig::builder().stemming(true));
        assert_eq!(t.tokenize("المكتبة والكتاب"), vec!["مكتب", "كتاب"]);
        // mixed text is not stemmed
        assert_eq!(t.tokenize("المكتبة library"), vec!["المكتبه", "library"]);
    }

    #[test]
    fn test_ngram_strategy() {
        let mut t = tokenizer(TokenizerConfig::builder().strategy(TokenizationStrategy::NGram).ngram_size(2));
        assert_eq!(t.tokenize("one two three"), vec!["one two", "two three"]);
        assert_eq!(t.tokenize("one"), vec!["one"]);
    }

    #[test]
    fn test_cache_is_bounded_and_clearable() {
        let mut t = tokenizer(TokenizerConfig::builder().cache_capacity(3));
        for i in 0..10 {
            t.tokenize(&format!("text number {}", i));
            assert!(t.get_cache_stats().token_entries <= 3);
        }
        t.clear_cache();
        let stats = t.get_cache_stats();
        assert_eq!(stats.total_entries(), 0);
        assert!(stats.enabled);
        assert_eq!(stats.capacity, 3);
    }

    #[test]
    fn test_cache_disabled_stores_nothing() {
        let mut t = tokenizer(TokenizerConfig::builder().caching(false));
        t.tokenize("some text");
        assert_eq!(t.get_cache_stats().token_entries, 0);
    }

    #[test]
    fn test_cached_result_matches_uncached() {
        let mut t = Tokenizer::with_defaults();
        let first = t.tokenize("repeat me please");
        let second = t.tokenize("repeat me please");
        assert_eq!(first, second);
        assert_eq!(first, t.tokenize_uncached("repeat me please"));
        assert_eq!(t.get_cache_stats().token_entries, 1);
    }

    #[test]
    fn test_positions_and_detokenize() {
        let mut t = Tokenizer::with_defaults();
        let tokens = t.tokenize_with_positions("a b c");
        assert_eq!(tokens[2], Token { value: "c".to_string(), position: 2 });
        assert_eq!(t.detokenize(&["a", "b", "c"], "-"), "a-b-c");
        let empty: [&str; 0] = [];
        assert_eq!(t.detokenize(&empty, " "), "");
    }

    #[test]
    fn test_batch() {
        let mut t = Tokenizer::with_defaults();
        let batch = t.tokenize_batch(&["a b", "", "c"]);
        assert_eq!(batch, vec![vec!["a", "b"], vec![], vec!["c"]]);
    }
}
