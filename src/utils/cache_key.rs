//! Cache key normalization.
//!
//! Turns a city name into an ASCII slug so that names differing only by
//! accents, case or whitespace style share one cache entry.

use crate::domain::entities::CacheKey;
use crate::utils::city_sanitizer::is_combining_diacritic;
use unicode_normalization::UnicodeNormalization;

/// Derives the canonical cache key for a city name.
///
/// # Normalization Rules
///
/// 1. Compatibility decomposition (NFKD), combining marks U+0300–U+036F removed
/// 2. Trimmed and lowercased
/// 3. Everything outside `[a-z0-9 -]` removed
/// 4. Runs of spaces and hyphens collapsed to a single `-`
/// 5. No leading or trailing `-`
///
/// Total over any input and idempotent.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_key("São Paulo").as_str(), "sao-paulo");
/// assert_eq!(normalize_key("SAO  PAULO").as_str(), "sao-paulo");
/// assert_eq!(normalize_key("sao-paulo").as_str(), "sao-paulo");
/// ```
pub fn normalize_key(city: &str) -> CacheKey {
    let folded: String = city
        .nfkd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();
    let lowered = folded.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.chars() {
        match c {
            'a'..='z' | '0'..='9' => {
                if pending_separator && !slug.is_empty() {
                    slug.push('-');
                }
                pending_separator = false;
                slug.push(c);
            }
            ' ' | '-' => pending_separator = true,
            _ => {}
        }
    }

    CacheKey::new_unchecked(slug)
}
