//! Noise filtering.
//!
//! Removes lines that are visual artifacts rather than content: page
//! numbers, dates, URLs, and running headers/footers detected by
//! repetition. Noise is excluded from every downstream stage, including
//! title resolution.

use regex::Regex;

/// A line repeated more than this many times across the document is
/// treated as running header/footer noise.
const REPETITION_THRESHOLD: usize = 2;

/// Compiled non-content patterns.
pub struct NoiseFilter {
    standalone_number: Regex,
    date_token: Regex,
    page_marker: Regex,
    url: Regex,
    blank: Regex,
}

impl NoiseFilter {
    /// Compile the pattern set.
    pub fn new() -> Self {
        Self {
            standalone_number: Regex::new(r"^\d+(\.|-)?$").unwrap(),
            date_token: Regex::new(r"^\d{1,2} [A-Z]{3,} \d{4}$").unwrap(),
            page_marker: Regex::new(r"(?i)^page \d+$").unwrap(),
            url: Regex::new(r"^http").unwrap(),
            blank: Regex::new(r"^\s*$").unwrap(),
        }
    }

    /// Check the fixed pattern set only.
    pub fn matches_pattern(&self, text: &str) -> bool {
        self.standalone_number.is_match(text)
            || self.date_token.is_match(text)
            || self.page_marker.is_match(text)
            || self.url.is_match(text)
            || self.blank.is_match(text)
    }

    /// Check both signals: pattern match and document-wide repetition.
    pub fn is_noise(&self, text: &str, frequency: usize) -> bool {
        frequency > REPETITION_THRESHOLD || self.matches_pattern(text)
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}
