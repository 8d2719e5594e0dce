//! City name validation and sanitization.
//!
//! Accepts letters (ASCII plus the Latin-1 Supplement and Latin Extended-A/B
//! blocks), single spaces or hyphens between words, and apostrophes.
//! Accents that decompose under NFD are folded into their base letter.

use crate::domain::entities::SanitizedCity;
use crate::error::{CodedError, MSG_INVALID_CITY, MSG_INVALID_CITY_LENGTH};
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Minimum length of a city name, in characters.
pub const MIN_CITY_LENGTH: usize = 2;

/// Maximum length of a city name, in characters.
pub const MAX_CITY_LENGTH: usize = 100;

/// Words separated by a single space or hyphen. Each word holds at least one
/// letter; apostrophes may appear anywhere within it.
static CITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const WORD: &str = r"[A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{024F}']*[A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{024F}][A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{024F}']*";
    Regex::new(&format!(r"^{WORD}(?:[ \-]{WORD})*$")).unwrap()
});

/// Validates and normalizes a raw city name.
///
/// # Rules
///
/// 1. Canonical decomposition (NFD); combining marks U+0300–U+036F are dropped
/// 2. Any other character outside letters, whitespace, `'` and `-` is rejected
/// 3. Leading/trailing whitespace is trimmed
/// 4. Length must be 2-100 characters
/// 5. The whole name must be letter runs joined by single spaces or hyphens
///
/// # Errors
///
/// Returns `INVALID_CITY` (400) if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_city("  New York ").unwrap().as_str(), "New York");
/// assert_eq!(sanitize_city("São Paulo").unwrap().as_str(), "Sao Paulo");
///
/// assert!(sanitize_city("London1").is_err());   // Digit
/// assert!(sanitize_city("A").is_err());         // Too short
/// assert!(sanitize_city("New  York").is_err()); // Double space
/// ```
pub fn sanitize_city(raw: &str) -> Result<SanitizedCity, CodedError> {
    let mut folded = String::with_capacity(raw.len());

    for c in raw.nfd() {
        if is_combining_diacritic(c) {
            continue;
        }
        if !is_allowed(c) {
            return Err(CodedError::invalid_city(MSG_INVALID_CITY));
        }
        folded.push(c);
    }

    let trimmed = folded.trim();
    let length = trimmed.chars().count();

    if !(MIN_CITY_LENGTH..=MAX_CITY_LENGTH).contains(&length) {
        return Err(CodedError::invalid_city(MSG_INVALID_CITY_LENGTH));
    }

    if !CITY_PATTERN.is_match(trimmed) {
        return Err(CodedError::invalid_city(MSG_INVALID_CITY));
    }

    Ok(SanitizedCity::new_unchecked(trimmed.to_string()))
}

pub(crate) fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn is_city_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (('\u{00C0}'..='\u{024F}').contains(&c) && c != '×' && c != '÷')
}

fn is_allowed(c: char) -> bool {
    is_city_letter(c) || c.is_whitespace() || c == '\'' || c == '-'
}
