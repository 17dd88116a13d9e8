// Arabic articulation classes and sound-confusion groups

use ahash::AHashMap;
use lazy_static::lazy_static;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhoneticClass {
    Pharyngeal,
    Emphatic,
    Sibilant,
    Stop,
    Fricative,
    Nasal,
    Liquid,
    Vowel,
    Consonant,
}

impl PhoneticClass {
    /// Digit used by phonetic codes. Vowels carry no digit.
    pub fn code_digit(&self) -> Option<char> {
        match self {
            PhoneticClass::Pharyngeal => Some('1'),
            PhoneticClass::Emphatic => Some('2'),
            PhoneticClass::Sibilant => Some('3'),
            PhoneticClass::Stop => Some('4'),
            PhoneticClass::Fricative => Some('5'),
            PhoneticClass::Nasal => Some('6'),
            PhoneticClass::Liquid => Some('7'),
            PhoneticClass::Consonant => Some('8'),
            PhoneticClass::Vowel => None,
        }
    }
}

const CLASS_TABLE: &[(PhoneticClass, &str)] = &[
    (PhoneticClass::Pharyngeal, "ءحعه"),
    (PhoneticClass::Emphatic, "صضطظق"),
    (PhoneticClass::Sibilant, "سشز"),
    (PhoneticClass::Stop, "بتدكج"),
    (PhoneticClass::Fricative, "ثذفخغ"),
    (PhoneticClass::Nasal, "من"),
    (PhoneticClass::Liquid, "لر"),
    (PhoneticClass::Vowel, "اويى"),
];

// Letters commonly confused in speech or spelling
const CONFUSION_GROUPS: [&str; 10] = [
    "سصث",
    "تط",
    "دض",
    "ذزظ",
    "حهة",
    "عءا",
    "قك",
    "يى",
    "خغ",
    "وؤ",
];

lazy_static! {
    static ref CLASSES: AHashMap<char, PhoneticClass> = CLASS_TABLE
        .iter()
        .flat_map(|(class, letters)| letters.chars().map(move |c| (c, *class)))
        .collect();

    static ref GROUP_OF: AHashMap<char, Vec<usize>> = {
        let mut map: AHashMap<char, Vec<usize>> = AHashMap::new();
        for (idx, group) in CONFUSION_GROUPS.iter().enumerate() {
            for c in group.chars() {
                map.entry(c).or_default().push(idx);
            }
        }
        map
    };
}

/// Articulation class of a letter; non-tabled letters are plain consonants.
pub fn classify(c: char) -> PhoneticClass {
    CLASSES.get(&c).copied().unwrap_or(PhoneticClass::Consonant)
}

pub fn are_phonetically_similar(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    match (GROUP_OF.get(&a), GROUP_OF.get(&b)) {
        (Some(ga), Some(gb)) => ga.iter().any(|g| gb.contains(g)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for (_, letters) in CLASS_TABLE {
            for c in letters.chars() {
                assert!(seen.insert(c), "letter {} appears in two classes", c);
            }
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('ع'), PhoneticClass::Pharyngeal);
        assert_eq!(classify('ص'), PhoneticClass::Emphatic);
        assert_eq!(classify('ش'), PhoneticClass::Sibilant);
        assert_eq!(classify('ب'), PhoneticClass::Stop);
        assert_eq!(classify('ف'), PhoneticClass::Fricative);
        assert_eq!(classify('ن'), PhoneticClass::Nasal);
        assert_eq!(classify('ر'), PhoneticClass::Liquid);
        assert_eq!(classify('و'), PhoneticClass::Vowel);
        assert_eq!(classify('x'), PhoneticClass::Consonant);
        assert_eq!(PhoneticClass::Vowel.code_digit(), None);
    }

    #[test]
    fn test_confusion_groups() {
        assert!(are_phonetically_similar('س', 'ص'));
        assert!(are_phonetically_similar('ث', 'س'));
        assert!(are_phonetically_similar('ق', 'ك'));
        assert!(are_phonetically_similar('ب', 'ب'));
        assert!(!are_phonetically_similar('ب', 'م'));
        assert!(!are_phonetically_similar('a', 'b'));
    }
}
