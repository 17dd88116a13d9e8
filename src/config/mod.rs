pub mod record;
pub mod strategy;

use ahash::AHashSet;
use log::debug;
use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

pub use self::record::FromRecord;
pub use self::strategy::{SimilarityMetric, TokenizationStrategy};

pub const DEFAULT_NGRAM_SIZE: usize = 2;
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Named starting points for common workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    ArabicOptimized,
    EnglishOptimized,
    Strict,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::ArabicOptimized => "arabic-optimized",
            Preset::EnglishOptimized => "english-optimized",
            Preset::Strict => "strict",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "arabic-optimized" | "arabic" => Some(Self::ArabicOptimized),
            "english-optimized" | "english" => Some(Self::EnglishOptimized),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Immutable tokenizer settings. Build through [`TokenizerConfig::builder`],
/// which validates every numeric parameter and compiles the custom pattern.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    strategy: TokenizationStrategy,
    lowercase: bool,
    remove_punctuation: bool,
    remove_stopwords: bool,
    normalize_arabic: bool,
    fuzzy_matching: bool,
    phonetic_matching: bool,
    stemming: bool,
    caching: bool,
    ngram_size: usize,
    fuzzy_threshold: f64,
    cache_capacity: usize,
    custom_pattern: Option<Regex>,
    stopwords: AHashSet<String>,
}

impl TokenizerConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn preset(preset: Preset) -> Self {
        let builder = match preset {
            Preset::ArabicOptimized => Self::builder()
                .normalize_arabic(true)
                .phonetic_matching(true)
                .fuzzy_matching(true)
                .fuzzy_threshold(0.75)
                .stemming(true),
            Preset::EnglishOptimized => Self::builder()
                .lowercase(true)
                .remove_punctuation(true)
                .remove_stopwords(true)
                .normalize_arabic(false)
                .phonetic_matching(false)
                .stemming(false),
            Preset::Strict => Self::builder()
                .fuzzy_matching(false)
                .phonetic_matching(false)
                .normalize_arabic(false),
        };
        // Presets only use values inside the validated ranges.
        builder.into_config()
    }

    pub fn strategy(&self) -> TokenizationStrategy { self.strategy }
    pub fn lowercase(&self) -> bool { self.lowercase }
    pub fn remove_punctuation(&self) -> bool { self.remove_punctuation }
    pub fn remove_stopwords(&self) -> bool { self.remove_stopwords }
    pub fn normalize_arabic(&self) -> bool { self.normalize_arabic }
    pub fn fuzzy_matching(&self) -> bool { self.fuzzy_matching }
    pub fn phonetic_matching(&self) -> bool { self.phonetic_matching }
    pub fn stemming(&self) -> bool { self.stemming }
    pub fn caching(&self) -> bool { self.caching }
    pub fn ngram_size(&self) -> usize { self.ngram_size }
    pub fn fuzzy_threshold(&self) -> f64 { self.fuzzy_threshold }
    pub fn cache_capacity(&self) -> usize { self.cache_capacity }
    pub fn custom_pattern(&self) -> Option<&Regex> { self.custom_pattern.as_ref() }

    /// Explicit stopwords. Empty means the built-in English and Arabic lists apply.
    pub fn stopwords(&self) -> &AHashSet<String> { &self.stopwords }

    /// Returns a description of which features are enabled
    pub fn describe(&self) -> String {
        let mut enabled = Vec::new();

        if self.lowercase { enabled.push("lowercasing"); }
        if self.remove_punctuation { enabled.push("removing punctuation"); }
        if self.remove_stopwords { enabled.push("removing stopwords"); }
        if self.normalize_arabic { enabled.push("normalizing Arabic"); }
        if self.fuzzy_matching { enabled.push("fuzzy matching"); }
        if self.phonetic_matching { enabled.push("phonetic matching"); }
        if self.stemming { enabled.push("stemming"); }
        if self.caching { enabled.push("caching"); }

        let features = if enabled.is_empty() {
            "no optional features".to_string()
        } else {
            enabled.join(", ")
        };
        format!("{} strategy with {}", self.strategy.as_str(), features)
    }

    pub fn validate(&self) -> Result<()> {
        validate_numbers(self.ngram_size, self.fuzzy_threshold, self.cache_capacity)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        ConfigBuilder::default().into_config()
    }
}

fn validate_numbers(ngram_size: usize, fuzzy_threshold: f64, cache_capacity: usize) -> Result<()> {
    if ngram_size == 0 {
        return Err(Error::ngram_size("ngram_size must be greater than 0"));
    }
    if !(0.0..=1.0).contains(&fuzzy_threshold) {
        return Err(Error::config(
            format!("Invalid fuzzy_threshold (must be within 0.0..=1.0): {}", fuzzy_threshold)
        ));
    }
    if cache_capacity == 0 {
        return Err(Error::config("cache_capacity must be greater than 0"));
    }
    Ok(())
}

/// Mutable staging area for a [`TokenizerConfig`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    strategy: TokenizationStrategy,
    lowercase: bool,
    remove_punctuation: bool,
    remove_stopwords: bool,
    normalize_arabic: bool,
    fuzzy_matching: bool,
    phonetic_matching: bool,
    stemming: bool,
    caching: bool,
    ngram_size: usize,
    fuzzy_threshold: f64,
    cache_capacity: usize,
    custom_pattern: Option<String>,
    stopwords: AHashSet<String>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            strategy: TokenizationStrategy::default(),
            lowercase: false,
            remove_punctuation: false,
            remove_stopwords: false,
            normalize_arabic: true,
            fuzzy_matching: true,
            phonetic_matching: false,
            stemming: false,
            caching: true,
            ngram_size: DEFAULT_NGRAM_SIZE,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            custom_pattern: None,
            stopwords: AHashSet::new(),
        }
    }
}

impl ConfigBuilder {
    pub fn strategy(mut self, strategy: TokenizationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn lowercase(mut self, flag: bool) -> Self {
        self.lowercase = flag;
        self
    }

    pub fn remove_punctuation(mut self, flag: bool) -> Self {
        self.remove_punctuation = flag;
        self
    }

    pub fn remove_stopwords(mut self, flag: bool) -> Self {
        self.remove_stopwords = flag;
        self
    }

    pub fn normalize_arabic(mut self, flag: bool) -> Self {
        self.normalize_arabic = flag;
        self
    }

    pub fn fuzzy_matching(mut self, flag: bool) -> Self {
        self.fuzzy_matching = flag;
        self
    }

    pub fn phonetic_matching(mut self, flag: bool) -> Self {
        self.phonetic_matching = flag;
        self
    }

    pub fn stemming(mut self, flag: bool) -> Self {
        self.stemming = flag;
        self
    }

    pub fn caching(mut self, flag: bool) -> Self {
        self.caching = flag;
        self
    }

    pub fn ngram_size(mut self, size: usize) -> Self {
        self.ngram_size = size;
        self
    }

    pub fn fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_pattern = Some(pattern.into());
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<TokenizerConfig> {
        validate_numbers(self.ngram_size, self.fuzzy_threshold, self.cache_capacity)?;

        let custom_pattern = match &self.custom_pattern {
            Some(pattern) => Some(Regex::new(pattern)?),
            None => None,
        };

        let config = TokenizerConfig {
            strategy: self.strategy,
            lowercase: self.lowercase,
            remove_punctuation: self.remove_punctuation,
            remove_stopwords: self.remove_stopwords,
            normalize_arabic: self.normalize_arabic,
            fuzzy_matching: self.fuzzy_matching,
            phonetic_matching: self.phonetic_matching,
            stemming: self.stemming,
            caching: self.caching,
            ngram_size: self.ngram_size,
            fuzzy_threshold: self.fuzzy_threshold,
            cache_capacity: self.cache_capacity,
            custom_pattern,
            stopwords: self.stopwords,
        };
        debug!("Built tokenizer config: {}", config.describe());
        Ok(config)
    }

    // Only for builders whose numeric values are known to be valid and that carry no pattern.
    fn into_config(self) -> TokenizerConfig {
        TokenizerConfig {
            strategy: self.strategy,
            lowercase: self.lowercase,
            remove_punctuation: self.remove_punctuation,
            remove_stopwords: self.remove_stopwords,
            normalize_arabic: self.normalize_arabic,
            fuzzy_matching: self.fuzzy_matching,
            phonetic_matching: self.phonetic_matching,
            stemming: self.stemming,
            caching: self.caching,
            ngram_size: self.ngram_size,
            fuzzy_threshold: self.fuzzy_threshold,
            cache_capacity: self.cache_capacity,
            custom_pattern: None,
            stopwords: self.stopwords,
        }
    }
}

impl From<&TokenizerConfig> for ConfigBuilder {
    fn from(config: &TokenizerConfig) -> Self {
        Self {
            strategy: config.strategy,
            lowercase: config.lowercase,
            remove_punctuation: config.remove_punctuation,
            remove_stopwords: config.remove_stopwords,
            normalize_arabic: config.normalize_arabic,
            fuzzy_matching: config.fuzzy_matching,
            phonetic_matching: config.phonetic_matching,
            stemming: config.stemming,
            caching: config.caching,
            ngram_size: config.ngram_size,
            fuzzy_threshold: config.fuzzy_threshold,
            cache_capacity: config.cache_capacity,
            custom_pattern: config.custom_pattern.as_ref().map(|re| re.as_str().to_string()),
            stopwords: config.stopwords.clone(),
        }
    }
}
