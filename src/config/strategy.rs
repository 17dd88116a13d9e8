// src/config/strategy.rs

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenizationStrategy {
    Word,
    Sentence,
    Character,
    Whitespace,
    NGram,
    Custom,
}

impl TokenizationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizationStrategy::Word => "word",
            TokenizationStrategy::Sentence => "sentence",
            TokenizationStrategy::Character => "character",
            TokenizationStrategy::Whitespace => "whitespace",
            TokenizationStrategy::NGram => "ngram",
            TokenizationStrategy::Custom => "custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().trim_matches('"').to_lowercase().as_str() {
            "word" => Some(Self::Word),
            "sentence" => Some(Self::Sentence),
            "character" | "char" => Some(Self::Character),
            "whitespace" => Some(Self::Whitespace),
            "ngram" | "n-gram" => Some(Self::NGram),
            "custom" | "pattern" => Some(Self::Custom),
            _ => None,
        }
    }
}

impl Default for TokenizationStrategy {
    fn default() -> Self {
        Self::Word
    }
}

/// Sentence-level metric used by the ranking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilarityMetric {
    Cosine,
    Jaccard,
    Dice,
    Overlap,
    Levenshtein,
    JaroWinkler,
}

impl SimilarityMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Jaccard => "jaccard",
            SimilarityMetric::Dice => "dice",
            SimilarityMetric::Overlap => "overlap",
            SimilarityMetric::Levenshtein => "levenshtein",
            SimilarityMetric::JaroWinkler => "jaro-winkler",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().trim_matches('"').to_lowercase().as_str() {
            "cosine" => Some(Self::Cosine),
            "jaccard" => Some(Self::Jaccard),
            "dice" => Some(Self::Dice),
            "overlap" => Some(Self::Overlap),
            "levenshtein" => Some(Self::Levenshtein),
            "jaro-winkler" | "jaro_winkler" | "jarowinkler" => Some(Self::JaroWinkler),
            _ => None,
        }
    }
}

impl Default for SimilarityMetric {
    fn default() -> Self {
        Self::Cosine
    }
}
