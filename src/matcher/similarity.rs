use log::trace;

use crate::config::{SimilarityMetric, TokenizerConfig};
use crate::parser::contains_arabic;
use crate::tokenizer::BoundedCache;
use crate::types::WordSimilarity;
use super::algorithms::{self, SimilarityAlgorithmFactory};
use super::phonetic::PhoneticMatcher;

type PairKey = (String, String);

/// Token-level scoring shared by the ranking engine.
///
/// Word pairs are scored phonetically when both sides contain Arabic and
/// phonetic matching is on, otherwise by normalized edit distance. Scores are
/// memoised per unordered pair when caching is enabled.
pub struct SimilarityCalculator {
    fuzzy_matching: bool,
    phonetic_matching: bool,
    threshold: f64,
    caching: bool,
    phonetic: PhoneticMatcher,
    pair_cache: BoundedCache<PairKey, f64>,
}

impl SimilarityCalculator {
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            fuzzy_matching: config.fuzzy_matching(),
            phonetic_matching: config.phonetic_matching(),
            threshold: config.fuzzy_threshold(),
            caching: config.caching(),
            phonetic: PhoneticMatcher::new(),
            pair_cache: BoundedCache::new(config.cache_capacity()),
        }
    }

    pub fn phonetic(&self) -> &PhoneticMatcher {
        &self.phonetic
    }

    /// Minimum score for two tokens to count as a match. Without fuzzy
    /// matching only identical tokens qualify.
    pub fn match_threshold(&self) -> f64 {
        if self.fuzzy_matching { self.threshold } else { 1.0 }
    }

    pub fn word_similarity(&mut self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        if !self.caching {
            return self.score_pair(a, b);
        }

        let key = if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };
        if let Some(score) = self.pair_cache.get(&key) {
            return *score;
        }
        let score = self.score_pair(a, b);
        self.pair_cache.insert(key, score);
        score
    }

    fn score_pair(&self, a: &str, b: &str) -> f64 {
        if self.phonetic_matching && contains_arabic(a) && contains_arabic(b) {
            self.phonetic.phonetic_similarity(a, b)
        } else {
            algorithms::similarity_ratio(a, b)
        }
    }

    /// Best-scoring candidate at or above the match threshold; earlier
    /// candidates win ties.
    pub fn best_match<S: AsRef<str>>(&mut self, token: &str, candidates: &[S]) -> Option<WordSimilarity> {
        let threshold = self.match_threshold();
        let mut best: Option<WordSimilarity> = None;

        for candidate in candidates {
            let candidate = candidate.as_ref();
            let score = self.word_similarity(token, candidate);
            if score < threshold {
                continue;
            }
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(WordSimilarity::new(token, candidate, score));
            }
        }
        best
    }

    /// Per query token, its single best candidate token. Candidates are not
    /// reserved, so several query tokens may point at the same one.
    pub fn word_matches(&mut self, query: &[String], candidate: &[String]) -> Vec<WordSimilarity> {
        query
            .iter()
            .filter_map(|token| self.best_match(token, candidate))
            .collect()
    }

    /// Greedy one-to-one matching in query order, as a percentage:
    /// `mean(matched scores) * matched / max(len) * 100`.
    pub fn fuzzy_jaccard(&mut self, query: &[String], candidate: &[String]) -> f64 {
        match (query.is_empty(), candidate.is_empty()) {
            (true, true) => return 100.0,
            (true, false) | (false, true) => return 0.0,
            _ => {}
        }

        let threshold = self.match_threshold();
        let mut used = vec![false; candidate.len()];
        let mut matched_scores = Vec::new();

        for token in query {
            let mut best: Option<(usize, f64)> = None;
            for (idx, other) in candidate.iter().enumerate() {
                if used[idx] {
                    continue;
                }
                let score = self.word_similarity(token, other);
                if score >= threshold && best.map_or(true, |(_, s)| score > s) {
                    best = Some((idx, score));
                }
            }
            if let Some((idx, score)) = best {
                used[idx] = true;
                matched_scores.push(score);
            }
        }

        if matched_scores.is_empty() {
            return 0.0;
        }
        let matches = matched_scores.len() as f64;
        let average = matched_scores.iter().sum::<f64>() / matches;
        let coverage = matches / query.len().max(candidate.len()) as f64;
        trace!("Fuzzy jaccard: {} matches, average {:.3}", matched_scores.len(), average);
        average * coverage * 100.0
    }

    /// Cosine over the raw token multisets as a percentage. Tokens only meet
    /// in the dot product when they are exactly equal, even in fuzzy mode,
    /// unlike [`Self::fuzzy_jaccard`].
    pub fn fuzzy_cosine(&self, query: &[String], candidate: &[String]) -> f64 {
        algorithms::cosine(query, candidate) * 100.0
    }

    /// Sentence-level score as a percentage for the chosen metric.
    pub fn score_tokens(&mut self, metric: SimilarityMetric, query: &[String], candidate: &[String]) -> f64 {
        match metric {
            SimilarityMetric::Jaccard if self.fuzzy_matching => self.fuzzy_jaccard(query, candidate),
            SimilarityMetric::Cosine if self.fuzzy_matching => self.fuzzy_cosine(query, candidate),
            other => SimilarityAlgorithmFactory::create(other).compare_tokens(query, candidate) * 100.0,
        }
    }

    pub fn cache_len(&self) -> usize {
        self.pair_cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.pair_cache.clear();
    }
}
