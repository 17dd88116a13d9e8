// Arabic-Indic <-> ASCII digit conversion

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::NumberExtraction;

lazy_static! {
    static ref ARABIC_DIGIT_RUN: Regex = Regex::new(r"[\u{0660}-\u{0669}]+").unwrap();
    static ref ASCII_DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

const ARABIC_ZERO: u32 = 0x0660;

pub fn arabic_to_english_numbers(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => {
                char::from(b'0' + (c as u32 - ARABIC_ZERO) as u8)
            }
            _ => c,
        })
        .collect()
}

pub fn english_to_arabic_numbers(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(ARABIC_ZERO + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Collects Arabic-Indic and ASCII digit runs into two separate lists, each in
/// order of appearance.
pub fn extract_numbers(text: &str) -> NumberExtraction {
    NumberExtraction {
        arabic: ARABIC_DIGIT_RUN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        english: ASCII_DIGIT_RUN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}
