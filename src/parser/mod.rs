pub mod arabic;
pub mod numerals;
pub mod phonetic;
pub mod stemmer;

use serde::{Serialize, Deserialize};

pub use self::arabic::ArabicNormalizer;
pub use self::numerals::{arabic_to_english_numbers, english_to_arabic_numbers, extract_numbers};
pub use self::phonetic::{are_phonetically_similar, PhoneticClass};
pub use self::stemmer::ArabicStemmer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Arabic,
    Mixed,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
            Language::Mixed => "mixed",
            Language::Unknown => "unknown",
        }
    }

    /// True when Arabic-specific processing applies.
    pub fn has_arabic(&self) -> bool {
        matches!(self, Language::Arabic | Language::Mixed)
    }
}

/// Arabic letters proper (hamza through yeh, plus the extended letters),
/// excluding diacritics, digits and punctuation.
pub fn is_arabic_letter(c: char) -> bool {
    matches!(c,
        '\u{0621}'..='\u{063A}' |
        '\u{0641}'..='\u{064A}' |
        '\u{0671}'..='\u{06D3}' |
        '\u{06FA}'..='\u{06FF}'
    )
}

/// Any character in the main Arabic block.
pub fn is_arabic_char(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}')
}

pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_letter)
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (matches!(c, '\u{00C0}'..='\u{024F}') && c.is_alphabetic())
}

/// Classifies text by comparing Arabic and Latin letter counts.
pub fn detect_language(text: &str) -> Language {
    let (arabic, latin) = text.chars().fold((0usize, 0usize), |(arabic, latin), c| {
        if is_arabic_letter(c) {
            (arabic + 1, latin)
        } else if is_latin_letter(c) {
            (arabic, latin + 1)
        } else {
            (arabic, latin)
        }
    });

    match (arabic, latin) {
        (0, 0) => Language::Unknown,
        (a, l) if a > 0 && l > 0 => Language::Mixed,
        (a, l) if a > l => Language::Arabic,
        _ => Language::English,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language("Hello World"), Language::English);
        assert_eq!(detect_language("مرحباً بك"), Language::Arabic);
        assert_eq!(detect_language("Hello مرحباً"), Language::Mixed);
        assert_eq!(detect_language(""), Language::Unknown);
        assert_eq!(detect_language("123 !?"), Language::Unknown);
        assert_eq!(detect_language("café"), Language::English);
    }

    #[test]
    fn test_diacritics_are_not_letters() {
        assert!(!is_arabic_letter('\u{064E}'));
        assert!(is_arabic_char('\u{064E}'));
        assert!(is_arabic_letter('ب'));
        assert!(contains_arabic("abc ب"));
        assert!(!contains_arabic("٣٤"));
    }
}
