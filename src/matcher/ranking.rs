// Sentence ranking and pairwise comparison on top of the tokenizer

use log::debug;

use crate::config::SimilarityMetric;
use crate::parser::contains_arabic;
use crate::tokenizer::Tokenizer;
use crate::types::{round2, SimilarityResult, WordSimilarity};

impl Tokenizer {
    /// Ranks `candidates` against `query`, best first.
    ///
    /// Every text is tokenized with this tokenizer's configuration. Equal
    /// scores keep the candidates' original order, and ranks run 1..=N.
    /// With `show_matches`, each result lists the best candidate token for
    /// every query token that clears the fuzzy threshold.
    pub fn compare_sentences<S: AsRef<str>>(
        &mut self,
        query: &str,
        candidates: &[S],
        metric: SimilarityMetric,
        show_matches: bool,
    ) -> Vec<SimilarityResult> {
        let query_tokens = self.tokenize(query);

        let mut results: Vec<SimilarityResult> = candidates
            .iter()
            .map(|candidate| {
                let candidate = candidate.as_ref();
                let candidate_tokens = self.tokenize(candidate);
                let percentage = round2(self.calculator.score_tokens(metric, &query_tokens, &candidate_tokens));
                let matches = if show_matches {
                    self.calculator.word_matches(&query_tokens, &candidate_tokens)
                } else {
                    Vec::new()
                };
                SimilarityResult {
                    sentence: candidate.to_string(),
                    percentage,
                    rank: 0,
                    matches,
                }
            })
            .collect();

        // sort_by is stable, so ties stay in candidate order
        results.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        for (idx, result) in results.iter_mut().enumerate() {
            result.rank = idx + 1;
        }

        debug!(
            "Ranked {} candidates by {} (top score {:?})",
            results.len(),
            metric.as_str(),
            results.first().map(|r| r.percentage)
        );
        results
    }

    /// Symmetric matrix of cosine percentages with 100 on the diagonal.
    pub fn compare_all_pairs<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<Vec<f64>> {
        let tokenized = self.tokenize_batch(texts);
        let n = tokenized.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            matrix[i][i] = 100.0;
            for j in (i + 1)..n {
                let score = round2(self.calculator.fuzzy_cosine(&tokenized[i], &tokenized[j]));
                matrix[i][j] = score;
                matrix[j][i] = score;
            }
        }
        matrix
    }

    /// Single-word similarity as a percentage.
    pub fn word_similarity_percentage(&mut self, first: &str, second: &str) -> f64 {
        let first = self.prepare_word(first);
        let second = self.prepare_word(second);
        round2(self.calculator.word_similarity(&first, &second) * 100.0)
    }

    /// Closest candidate to `word` that clears the match threshold. The
    /// returned pair holds the caller's original strings.
    pub fn find_best_match<S: AsRef<str>>(&mut self, word: &str, candidates: &[S]) -> Option<WordSimilarity> {
        let prepared_word = self.prepare_word(word);
        let prepared: Vec<String> = candidates.iter().map(|c| self.prepare_word(c.as_ref())).collect();

        let found = self.calculator.best_match(&prepared_word, &prepared)?;
        let idx = prepared.iter().position(|c| *c == found.target)?;
        Some(WordSimilarity::new(word, candidates[idx].as_ref(), found.score))
    }

    /// Fuzzy Jaccard percentage between two texts.
    pub fn fuzzy_jaccard(&mut self, first: &str, second: &str) -> f64 {
        let a = self.tokenize(first);
        let b = self.tokenize(second);
        round2(self.calculator.fuzzy_jaccard(&a, &b))
    }

    /// Cosine percentage between two texts. Token equality is exact.
    pub fn fuzzy_cosine(&mut self, first: &str, second: &str) -> f64 {
        let a = self.tokenize(first);
        let b = self.tokenize(second);
        round2(self.calculator.fuzzy_cosine(&a, &b))
    }

    pub fn find_phonetic_matches<S: AsRef<str>>(
        &self,
        word: &str,
        candidates: &[S],
        threshold: f64,
    ) -> Vec<WordSimilarity> {
        self.calculator.phonetic().find_phonetic_matches(word, candidates, threshold)
    }

    pub fn phonetic_similarity(&self, first: &str, second: &str) -> f64 {
        self.calculator.phonetic().phonetic_similarity(first, second)
    }

    pub fn phonetic_code(&self, word: &str) -> String {
        self.calculator.phonetic().phonetic_code(word)
    }

    fn prepare_word(&self, word: &str) -> String {
        let mut prepared = word.trim().to_string();
        if self.config().normalize_arabic() && contains_arabic(&prepared) {
            prepared = self.normalize_arabic_text(&prepared);
        }
        if self.config().lowercase() {
            prepared = prepared.to_lowercase();
        }
        prepared
    }
}
