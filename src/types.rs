use serde::{Serialize, Deserialize};
use ahash::AHashMap;

use crate::parser::Language;

/// A token value together with its index in the tokenized sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub position: usize,
}

/// Similarity between two individual tokens, score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSimilarity {
    pub source: String,
    pub target: String,
    pub score: f64,
}

impl WordSimilarity {
    pub fn new(source: impl Into<String>, target: impl Into<String>, score: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            score,
        }
    }

    pub fn percentage(&self) -> f64 {
        round2(self.score * 100.0)
    }
}

/// One ranked candidate produced by `Tokenizer::compare_sentences`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub sentence: String,
    pub percentage: f64,
    pub rank: usize,
    pub matches: Vec<WordSimilarity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStatistics {
    pub total_tokens: usize,
    pub unique_tokens: usize,
    pub total_characters: usize,
    pub average_token_length: f64,
    // unique / total, 0 for empty input
    pub lexical_diversity: f64,
    pub language: Language,
    pub frequency: AHashMap<String, usize>,
    pub top_tokens: Vec<(String, usize)>,
}

/// Digit runs found in a text, one list per script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberExtraction {
    pub arabic: Vec<String>,
    pub english: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub capacity: usize,
    pub token_entries: usize,
    pub similarity_entries: usize,
}

impl CacheStats {
    pub fn total_entries(&self) -> usize {
        self.token_entries + self.similarity_entries
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
