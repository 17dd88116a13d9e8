//! Pure string, set and frequency-vector similarity primitives.
//!
//! All lengths are measured in `char`s, so Arabic text is compared letter by
//! letter rather than byte by byte.

use std::cmp::min;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use crate::config::SimilarityMetric;

pub const DEFAULT_WINKLER_SCALE: f64 = 0.1;
const WINKLER_MAX_PREFIX: usize = 4;

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `source` into `target`.
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    if source_chars.is_empty() {
        return target_chars.len();
    }
    if target_chars.is_empty() {
        return source_chars.len();
    }

    let mut prev_row: Vec<usize> = (0..=target_chars.len()).collect();
    let mut curr_row = vec![0; target_chars.len() + 1];

    for i in 1..=source_chars.len() {
        curr_row[0] = i;
        for j in 1..=target_chars.len() {
            let cost = if source_chars[i - 1] == target_chars[j - 1] { 0 } else { 1 };
            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost,  // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[target_chars.len()]
}

/// `1 - distance / max_len`. Two empty strings are identical; one empty
/// string shares nothing with a non-empty one.
pub fn similarity_ratio(source: &str, target: &str) -> f64 {
    let max_len = source.chars().count().max(target.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    if source.is_empty() || target.is_empty() {
        return 0.0;
    }
    1.0 - levenshtein_distance(source, target) as f64 / max_len as f64
}

/// Defined only for strings of equal length.
pub fn hamming_distance(source: &str, target: &str) -> Option<usize> {
    if source.chars().count() != target.chars().count() {
        return None;
    }
    Some(source.chars().zip(target.chars()).filter(|(a, b)| a != b).count())
}

fn to_set<S: AsRef<str>>(items: &[S]) -> AHashSet<&str> {
    items.iter().map(|s| s.as_ref()).collect()
}

fn intersection_size<T: Eq + Hash>(a: &AHashSet<T>, b: &AHashSet<T>) -> usize {
    a.iter().filter(|item| b.contains(*item)).count()
}

pub fn jaccard<S: AsRef<str>>(source: &[S], target: &[S]) -> f64 {
    let (a, b) = (to_set(source), to_set(target));
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }
    let shared = intersection_size(&a, &b);
    let union = a.len() + b.len() - shared;
    shared as f64 / union as f64
}

pub fn dice<S: AsRef<str>>(source: &[S], target: &[S]) -> f64 {
    let (a, b) = (to_set(source), to_set(target));
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }
    2.0 * intersection_size(&a, &b) as f64 / (a.len() + b.len()) as f64
}

pub fn overlap<S: AsRef<str>>(source: &[S], target: &[S]) -> f64 {
    let (a, b) = (to_set(source), to_set(target));
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }
    intersection_size(&a, &b) as f64 / a.len().min(b.len()) as f64
}

pub(crate) fn term_frequencies<S: AsRef<str>>(items: &[S]) -> AHashMap<&str, f64> {
    let mut freqs = AHashMap::new();
    for item in items {
        *freqs.entry(item.as_ref()).or_insert(0.0) += 1.0;
    }
    freqs
}

/// Cosine of the two term-frequency vectors; 0 when either vector is empty.
pub fn cosine<S: AsRef<str>>(source: &[S], target: &[S]) -> f64 {
    let source_vec = term_frequencies(source);
    let target_vec = term_frequencies(target);

    let mut dot_product = 0.0;
    let mut source_norm = 0.0;
    let mut target_norm = 0.0;

    for (term, s_val) in &source_vec {
        source_norm += s_val * s_val;
        if let Some(t_val) = target_vec.get(term) {
            dot_product += s_val * t_val;
        }
    }
    for t_val in target_vec.values() {
        target_norm += t_val * t_val;
    }

    let norm = (source_norm * target_norm).sqrt();
    if norm == 0.0 { 0.0 } else { dot_product / norm }
}

pub fn jaro(source: &str, target: &str) -> f64 {
    let s: Vec<char> = source.chars().collect();
    let t: Vec<char> = target.chars().collect();

    match (s.is_empty(), t.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let window = (s.len().max(t.len()) / 2).saturating_sub(1).max(1);
    let mut s_matched = vec![false; s.len()];
    let mut t_matched = vec![false; t.len()];
    let mut matches = 0usize;

    for i in 0..s.len() {
        let start = i.saturating_sub(window);
        let end = min(i + window + 1, t.len());
        for j in start..end {
            if !t_matched[j] && s[i] == t[j] {
                s_matched[i] = true;
                t_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..s.len() {
        if !s_matched[i] {
            continue;
        }
        while !t_matched[k] {
            k += 1;
        }
        if s[i] != t[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let half_transpositions = transpositions as f64 / 2.0;
    (m / s.len() as f64 + m / t.len() as f64 + (m - half_transpositions) / m) / 3.0
}

pub fn jaro_winkler(source: &str, target: &str) -> f64 {
    jaro_winkler_with_scale(source, target, DEFAULT_WINKLER_SCALE)
}

/// Jaro similarity boosted by the shared prefix (at most four characters).
pub fn jaro_winkler_with_scale(source: &str, target: &str, scale: f64) -> f64 {
    let jaro_score = jaro(source, target);
    let prefix = source
        .chars()
        .zip(target.chars())
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(a, b)| a == b)
        .count();
    jaro_score + prefix as f64 * scale * (1.0 - jaro_score)
}

/// Token-sequence similarity in [0, 1].
pub trait SimilarityAlgorithm {
    fn name(&self) -> SimilarityMetric;

    fn compare_tokens(&self, source: &[String], target: &[String]) -> f64;
}

pub struct CosineMatcher;

impl SimilarityAlgorithm for CosineMatcher {
    fn name(&self) -> SimilarityMetric {
        SimilarityMetric::Cosine
    }

    fn compare_tokens(&self, source: &[String], target: &[String]) -> f64 {
        cosine(source, target)
    }
}

pub struct JaccardMatcher;

impl SimilarityAlgorithm for JaccardMatcher {
    fn name(&self) -> SimilarityMetric {
        SimilarityMetric::Jaccard
    }

    fn compare_tokens(&self, source: &[String], target: &[String]) -> f64 {
        jaccard(source, target)
    }
}

pub struct DiceMatcher;

impl SimilarityAlgorithm for DiceMatcher {
    fn name(&self) -> SimilarityMetric {
        SimilarityMetric::Dice
    }

    fn compare_tokens(&self, source: &[String], target: &[String]) -> f64 {
        dice(source, target)
    }
}

pub struct OverlapMatcher;

impl SimilarityAlgorithm for OverlapMatcher {
    fn name(&self) -> SimilarityMetric {
        SimilarityMetric::Overlap
    }

    fn compare_tokens(&self, source: &[String], target: &[String]) -> f64 {
        overlap(source, target)
    }
}

/// Edit-distance ratio over the space-joined token sequences.
pub struct LevenshteinMatcher;

impl SimilarityAlgorithm for LevenshteinMatcher {
    fn name(&self) -> SimilarityMetric {
        SimilarityMetric::Levenshtein
    }

    fn compare_tokens(&self, source: &[String], target: &[String]) -> f64 {
        similarity_ratio(&source.join(" "), &target.join(" "))
    }
}

pub struct JaroWinklerMatcher {
    scale: f64,
}

impl JaroWinklerMatcher {
    pub fn with_config(scale: f64) -> Self {
        Self { scale }
    }
}

impl SimilarityAlgorithm for JaroWinklerMatcher {
    fn name(&self) -> SimilarityMetric {
        SimilarityMetric::JaroWinkler
    }

    fn compare_tokens(&self, source: &[String], target: &[String]) -> f64 {
        jaro_winkler_with_scale(&source.join(" "), &target.join(" "), self.scale)
    }
}

/// Factory for creating similarity algorithm instances
pub struct SimilarityAlgorithmFactory;

impl SimilarityAlgorithmFactory {
    pub fn create(metric: SimilarityMetric) -> Box<dyn SimilarityAlgorithm> {
        match metric {
            SimilarityMetric::Cosine => Box::new(CosineMatcher),
            SimilarityMetric::Jaccard => Box::new(JaccardMatcher),
            SimilarityMetric::Dice => Box::new(DiceMatcher),
            SimilarityMetric::Overlap => Box::new(OverlapMatcher),
            SimilarityMetric::Levenshtein => Box::new(LevenshteinMatcher),
            SimilarityMetric::JaroWinkler => Box::new(JaroWinklerMatcher::with_config(DEFAULT_WINKLER_SCALE)),
        }
    }
}
