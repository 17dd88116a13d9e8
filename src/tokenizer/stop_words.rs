// src/tokenizer/stop_words.rs

use ahash::AHashSet;
use lazy_static::lazy_static;

use crate::parser::ArabicNormalizer;

pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by",
    "can", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "his", "i", "if", "in", "is", "it", "its", "me", "my",
    "no", "not", "of", "on", "or", "our", "she", "so", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "to", "was",
    "we", "were", "what", "when", "where", "which", "who", "why", "will", "with",
    "you", "your",
];

pub const ARABIC_STOP_WORDS: &[&str] = &[
    "من", "في", "على", "إلى", "عن", "مع", "بين", "حتى", "منذ",
    "و", "أو", "ثم", "لكن", "بل", "أم",
    "هو", "هي", "هم", "هن", "أنا", "نحن", "أنت", "أنتم",
    "هذا", "هذه", "ذلك", "تلك", "هؤلاء",
    "الذي", "التي", "الذين",
    "ما", "ماذا", "أين", "متى", "كيف", "لماذا",
    "كان", "كانت", "ليس", "قد", "لقد", "سوف", "لن", "لم", "لا", "إن", "أن", "إذا",
    "كل", "بعض", "غير", "عند", "هناك", "هنا", "بعد", "قبل",
];

lazy_static! {
    static ref BUILT_IN: StopWordSet = StopWordSet::from_words(
        ENGLISH_STOP_WORDS.iter().chain(ARABIC_STOP_WORDS.iter()).copied()
    );
}

/// Case-insensitive stopword lookup. Arabic entries are stored both as written
/// and in normalized form, so lookups work before and after normalization.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: AHashSet<String>,
}

impl StopWordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalizer = ArabicNormalizer::new();
        let mut set = AHashSet::new();
        for word in words {
            let folded = word.as_ref().to_lowercase();
            set.insert(normalizer.normalize(&folded));
            set.insert(folded);
        }
        Self { words: set }
    }

    /// The union of the English and Arabic lists shipped with the crate.
    pub fn built_in() -> Self {
        BUILT_IN.clone()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_union() {
        let set = StopWordSet::built_in();
        assert!(set.contains("the"));
        assert!(set.contains("The"));
        assert!(set.contains("في"));
        assert!(!set.contains("kitten"));
    }

    #[test]
    fn test_normalized_arabic_forms_match() {
        let set = StopWordSet::built_in();
        assert!(set.contains("إلى"));
        assert!(set.contains("الي"));
        assert!(set.contains("علي"));
    }

    #[test]
    fn test_custom_words() {
        let set = StopWordSet::from_words(["Foo"]);
        assert!(set.contains("foo"));
        assert!(set.contains("FOO"));
        assert!(!set.contains("the"));
    }
}
