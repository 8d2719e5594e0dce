//! City name and cache key value types.

use std::fmt;

/// A city name that passed [`crate::utils::city_sanitizer::sanitize_city`].
///
/// Only letters, single spaces/hyphens between words and apostrophes,
/// 2 to 100 characters. Constructible only through the sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedCity(String);

impl SanitizedCity {
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SanitizedCity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical cache slug produced by [`crate::utils::cache_key::normalize_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
