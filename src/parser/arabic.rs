// Character-level Arabic orthography normalization

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIACRITICS: Regex = Regex::new(r"[\u{064B}-\u{065F}\u{0670}]").unwrap();
    static ref ALEF_VARIANTS: Regex = Regex::new(r"[\u{0622}\u{0623}\u{0625}\u{0671}]").unwrap();
    static ref TEH_MARBUTA: Regex = Regex::new(r"\u{0629}").unwrap();
    static ref HAMZA_CARRIERS: Regex = Regex::new(r"[\u{0624}\u{0626}]").unwrap();
    static ref ALEF_MAKSURA: Regex = Regex::new(r"\u{0649}").unwrap();
    static ref TATWEEL: Regex = Regex::new(r"\u{0640}").unwrap();
}

const BARE_ALEF: &str = "\u{0627}";
const HEH: &str = "\u{0647}";
const HAMZA: &str = "\u{0621}";
const YEH: &str = "\u{064A}";

/// Stateless Arabic normalizer.
///
/// Applies, in order: diacritic (tashkeel) removal, alef unification,
/// teh marbuta to heh, hamza carriers to bare hamza, alef maksura to yeh and
/// tatweel removal. No Unicode canonical normalization is performed, so
/// decomposed input must be composed by the caller first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicNormalizer;

impl ArabicNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let text = DIACRITICS.replace_all(text, "");
        let text = ALEF_VARIANTS.replace_all(&text, BARE_ALEF);
        let text = TEH_MARBUTA.replace_all(&text, HEH);
        let text = HAMZA_CARRIERS.replace_all(&text, HAMZA);
        let text = ALEF_MAKSURA.replace_all(&text, YEH);
        TATWEEL.replace_all(&text, "").into_owned()
    }

    pub fn remove_diacritics(&self, text: &str) -> String {
        DIACRITICS.replace_all(text, "").into_owned()
    }

    pub fn remove_tatweel(&self, text: &str) -> String {
        TATWEEL.replace_all(text, "").into_owned()
    }

    pub fn is_diacritic(&self, c: char) -> bool {
        matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_greeting() {
        let normalizer = ArabicNormalizer::new();
        assert_eq!(normalizer.normalize("أَلسَّلامُ عَلَيْكُمْ"), "السلام عليكم");
    }

    #[test]
    fn test_each_substitution() {
        let n = ArabicNormalizer::new();
        assert_eq!(n.normalize("إسلام"), "اسلام");
        assert_eq!(n.normalize("آمن"), "امن");
        assert_eq!(n.normalize("مدرسة"), "مدرسه");
        assert_eq!(n.normalize("مؤمن"), "مءمن");
        assert_eq!(n.normalize("قائل"), "قاءل");
        assert_eq!(n.normalize("على"), "علي");
        assert_eq!(n.normalize("كتـــاب"), "كتاب");
        assert_eq!(n.normalize("Hello"), "Hello");
        assert_eq!(n.normalize(""), "");
    }


    #[test]
    fn test_partial_helpers() {
        let n = ArabicNormalizer::new();
        assert_eq!(n.remove_diacritics("كَتَبَ"), "كتب");
        assert_eq!(n.remove_tatweel("جـميل"), "جميل");
        assert!(n.is_diacritic('\u{0651}'));
        assert!(!n.is_diacritic('ب'));
    }
}
