pub mod algorithms;
pub mod phonetic;
pub mod ranking;
pub mod similarity;
// Re-export the main types
pub use self::algorithms::{
    cosine,
    dice,
    hamming_distance,
    jaccard,
    jaro,
    jaro_winkler,
    jaro_winkler_with_scale,
    levenshtein_distance,
    overlap,
    similarity_ratio,
    SimilarityAlgorithm,
    SimilarityAlgorithmFactory,
};
pub use self::phonetic::PhoneticMatcher;
pub use self::similarity::SimilarityCalculator;
