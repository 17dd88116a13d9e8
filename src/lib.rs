//! kalimat is a library for tokenizing and approximately matching Latin-script
//! and Arabic-script text. It normalizes Arabic orthography, splits text under
//! configurable strategies, and scores words, sentences and token sets with
//! exact, edit-distance and phonetic measures.

// Module declarations
pub mod error;
pub mod config;
pub mod parser;
pub mod tokenizer;
pub mod matcher;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use config::{Preset, SimilarityMetric, TokenizationStrategy, TokenizerConfig};
pub use matcher::{levenshtein_distance, PhoneticMatcher, SimilarityCalculator};
pub use parser::{detect_language, ArabicNormalizer, ArabicStemmer, Language};
pub use tokenizer::Tokenizer;
pub use types::{
    CacheStats,
    NumberExtraction,
    SimilarityResult,
    TextStatistics,
    Token,
    WordSimilarity,
};
