// Light Arabic stemmer: affix stripping with a minimum-length guard

use super::ArabicNormalizer;

// Longest first, so the first hit is the longest applicable affix.
const PREFIXES: &[&str] = &["وال", "بال", "كال", "فال", "لل", "ال", "و", "ف", "ب", "ك", "ل"];

const SUFFIXES: &[&str] = &[
    "كما", "هما", "تين", "تان",
    "ها", "ان", "ات", "ون", "ين", "يه", "هم", "هن", "كم", "نا",
    "ه", "ي",
];

const WEAK_LETTERS: &[char] = &['ا', 'و', 'ي'];

/// Rule-based stemmer. It has no dictionary and can over- or under-strip.
#[derive(Debug, Clone, Default)]
pub struct ArabicStemmer {
    normalizer: ArabicNormalizer,
}

impl ArabicStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strips at most one prefix and one suffix. An affix is only removed when
    /// the word is longer than the affix by more than two letters.
    pub fn stem(&self, word: &str) -> String {
        let normalized = self.normalizer.normalize(word.trim());
        let mut chars: Vec<char> = normalized.chars().collect();

        if let Some(len) = longest_affix(&chars, PREFIXES, |w, a| w.starts_with(a)) {
            chars.drain(..len);
        }
        if let Some(len) = longest_affix(&chars, SUFFIXES, |w, a| w.ends_with(a)) {
            chars.truncate(chars.len() - len);
        }

        chars.into_iter().collect()
    }

    pub fn stem_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words.iter().map(|w| self.stem(w.as_ref())).collect()
    }

    /// Approximates the consonantal root: short stems are returned as they
    /// are, longer ones lose their weak letters and keep the first three.
    pub fn extract_root(&self, word: &str) -> String {
        let stem = self.stem(word);
        if stem.chars().count() <= 4 {
            return stem;
        }

        let strong: Vec<char> = stem.chars().filter(|c| !WEAK_LETTERS.contains(c)).collect();
        if strong.len() < 3 {
            return stem;
        }
        strong[..3].iter().collect()
    }

    pub fn same_root(&self, a: &str, b: &str) -> bool {
        let root_a = self.extract_root(a);
        root_a.chars().count() >= 2 && root_a == self.extract_root(b)
    }
}

fn longest_affix<F>(chars: &[char], affixes: &[&str], matches: F) -> Option<usize>
where
    F: Fn(&str, &str) -> bool,
{
    let word: String = chars.iter().collect();
    for &affix in affixes {
        let len = affix.chars().count();
        if chars.len() > len + 2 && matches(&word, affix) {
            return Some(len);
        }
    }
    None
}
