// "Sounds like" comparison for Arabic words

use log::trace;

use crate::parser::phonetic::{are_phonetically_similar, classify};
use crate::parser::{is_arabic_letter, ArabicNormalizer};
use crate::types::WordSimilarity;

const POSITION_WEIGHT: f64 = 0.7;
const LENGTH_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Default)]
pub struct PhoneticMatcher {
    normalizer: ArabicNormalizer,
}

impl PhoneticMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position-aligned sound-class agreement blended with a length ratio.
    pub fn phonetic_similarity(&self, first: &str, second: &str) -> f64 {
        let a: Vec<char> = self.normalizer.normalize(first).chars().collect();
        let b: Vec<char> = self.normalizer.normalize(second).chars().collect();

        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }

        let overlap = a.len().min(b.len());
        let longest = a.len().max(b.len());
        let matches = a
            .iter()
            .zip(b.iter())
            .filter(|(x, y)| are_phonetically_similar(**x, **y))
            .count();

        POSITION_WEIGHT * (matches as f64 / overlap as f64)
            + LENGTH_WEIGHT * (overlap as f64 / longest as f64)
    }

    /// Candidates scoring at least `threshold`, best first. A candidate equal to
    /// `word` itself is skipped.
    pub fn find_phonetic_matches<S: AsRef<str>>(
        &self,
        word: &str,
        candidates: &[S],
        threshold: f64,
    ) -> Vec<WordSimilarity> {
        let mut matches: Vec<WordSimilarity> = candidates
            .iter()
            .map(|c| c.as_ref())
            .filter(|c| *c != word)
            .map(|c| WordSimilarity::new(word, c, self.phonetic_similarity(word, c)))
            .filter(|m| m.score >= threshold)
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        trace!("{} phonetic matches for '{}' at threshold {}", matches.len(), word, threshold);
        matches
    }

    /// Soundex-style code: first letter kept, the rest mapped to class digits
    /// with vowels dropped and repeated digits collapsed.
    ///
    /// Vowels do not break a run, and the first letter's own class counts as
    /// the previous digit, so same-class consonants around a vowel fold into
    /// the leading letter:
    ///
    /// ```
    /// use kalimat::PhoneticMatcher;
    ///
    /// let matcher = PhoneticMatcher::new();
    /// // ك, ت and ب are all stops
    /// assert_eq!(matcher.phonetic_code("كتاب"), "ك");
    /// assert_eq!(matcher.phonetic_code("مدرسة"), "م4731");
    /// ```
    pub fn phonetic_code(&self, word: &str) -> String {
        let normalized = self.normalizer.normalize(word);
        let mut letters = normalized.chars().filter(|c| c.is_alphabetic());

        let first = match letters.next() {
            Some(c) => c,
            None => return String::new(),
        };

        let mut code = String::new();
        code.push(first);
        let mut last = digit_for(first);

        for c in letters {
            let digit = digit_for(c);
            if digit.is_some() && digit != last {
                code.extend(digit);
            }
            last = digit.or(last);
        }
        code
    }
}

fn digit_for(c: char) -> Option<char> {
    if is_arabic_letter(c) {
        classify(c).code_digit()
    } else {
        Some('8')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_and_empty() {
        let matcher = PhoneticMatcher::new();
        assert_eq!(matcher.phonetic_similarity("كتاب", "كتاب"), 1.0);
        // normalization makes these identical
        assert_eq!(matcher.phonetic_similarity("مدرسة", "مدرسه"), 1.0);
        assert_eq!(matcher.phonetic_similarity("", "كتاب"), 0.0);
        assert_eq!(matcher.phonetic_similarity("كتاب", ""), 0.0);
    }

    #[test]
    fn test_confusable_letters_score_high() {
        let matcher = PhoneticMatcher::new();
        // س/ص differ only by emphasis
        assert_eq!(matcher.phonetic_similarity("سيف", "صيف"), 1.0 * 0.7 + 0.3);
        let unrelated = matcher.phonetic_similarity("سيف", "باب");
        assert!(unrelated < 0.5);
    }

    #[test]
    fn test_length_difference_penalised() {
        let matcher = PhoneticMatcher::new();
        let score = matcher.phonetic_similarity("كتب", "كتبا");
        assert!((score - (0.7 + 0.3 * 0.75)).abs() < 1e-9);
    }

    #[test]
    fn test_find_matches_sorted_and_self_excluded() {
        let matcher = PhoneticMatcher::new();
        let found = matcher.find_phonetic_matches("سيف", &["سيف", "صيف", "سيفا", "باب"], 0.7);
        let targets: Vec<&str> = found.iter().map(|m| m.target.as_str()).collect();
        assert_eq!(targets, vec!["صيف", "سيفا"]);
        assert!(found[0].score >= found[1].score);
    }

    #[test]
    fn test_phonetic_code() {
        let matcher = PhoneticMatcher::new();
        assert_eq!(matcher.phonetic_code(""), "");
        assert_eq!(matcher.phonetic_code("كتاب"), "ك");
        // the vowel between two stops does not reset the run
        assert_eq!(matcher.phonetic_code("سبوت"), "س4");
        assert_eq!(matcher.phonetic_code("مدرسة"), "م4731");
        assert_eq!(matcher.phonetic_code("صيف"), matcher.phonetic_code("صيفف"));
    }
}
