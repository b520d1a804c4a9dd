//! Heading classification.
//!
//! Decides, per surviving line, whether it is a heading candidate. Two
//! rule sets are supported as configurable policies; see
//! [`HeadingPolicy`](super::HeadingPolicy).

use regex::Regex;

use crate::model::{DocumentStats, TextLine};

use super::noise::NoiseFilter;
use super::options::HeadingPolicy;

/// Phrases that mark boilerplate rather than headings (strict policy).
const BOILERPLATE: [&str; 3] = ["version", "copyright", "all rights reserved"];

/// An accepted heading candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// The line begins with an explicit dot-separated numbering prefix
    Numbered {
        /// The numeric prefix (e.g. "3.2")
        prefix: String,
    },
    /// The line is accepted on styling or size alone
    Styled,
}

/// Per-line heading candidate decision.
pub struct HeadingClassifier {
    policy: HeadingPolicy,
    /// Dot-separated integer prefix followed by a period or whitespace
    numbering: Regex,
    /// Numbering prefix followed by whitespace and text (lenient form)
    structured: Regex,
}

impl HeadingClassifier {
    /// Create a classifier for the given policy.
    pub fn new(policy: HeadingPolicy) -> Self {
        Self {
            policy,
            numbering: Regex::new(r"^(\d+(?:\.\d+)*)(?:\.|\s)").unwrap(),
            structured: Regex::new(r"^\d+(?:\.\d+)*\s+\S").unwrap(),
        }
    }

    /// The numbering prefix of a line, if it matches the pattern.
    ///
    /// Greedy-with-backtracking capture semantics: "3.2.1" alone yields
    /// "3.2" (the final component is consumed as the separator's text).
    pub fn numbering_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.numbering
            .captures(text)
            .map(|c| c.get(1).unwrap().as_str())
    }

    /// Short numbered fragments ("12 Amount") read as structured form
    /// fields, not content; the lenient policy drops them before any
    /// other consideration, including the title.
    pub fn is_form_field(&self, line: &TextLine) -> bool {
        self.structured.is_match(&line.text) && line.word_count() <= 4
    }

    /// Decide whether a line is a heading candidate.
    ///
    /// A total function: the outcome is `None` or an accepted candidate,
    /// never an error.
    pub fn classify(
        &self,
        line: &TextLine,
        stats: &DocumentStats,
        noise: &NoiseFilter,
    ) -> Option<Candidate> {
        match self.policy {
            HeadingPolicy::Strict => self.classify_strict(line, stats),
            HeadingPolicy::Lenient => self.classify_lenient(line, stats, noise),
        }
    }

    /// Strict rules: length gate, size gate, case gate, boilerplate
    /// exclusion. The numbering pattern is the strongest signal and
    /// short-circuits the size and case gates.
    fn classify_strict(&self, line: &TextLine, stats: &DocumentStats) -> Option<Candidate> {
        let chars = line.char_count();
        if chars < 4 || chars > 120 {
            return None;
        }

        let prefix = self.numbering_prefix(&line.text);

        if line.font_size < stats.body_size + 1.0 && prefix.is_none() {
            return None;
        }
        if line.is_uppercase() && prefix.is_none() {
            return None;
        }

        let lowered = line.text.to_lowercase();
        if BOILERPLATE.iter().any(|p| lowered.contains(p)) {
            return None;
        }

        if let Some(prefix) = prefix {
            return Some(Candidate::Numbered {
                prefix: prefix.to_string(),
            });
        }
        if line.bold || line.italic {
            return Some(Candidate::Styled);
        }
        None
    }

    /// Lenient rules: word-count and bold/size ratios against the
    /// largest observed size. Structured lines with more than 4 words are
    /// first-level headings outright; shorter ones are discarded as form
    /// fields.
    fn classify_lenient(
        &self,
        line: &TextLine,
        stats: &DocumentStats,
        noise: &NoiseFilter,
    ) -> Option<Candidate> {
        let words = line.word_count();

        if self.structured.is_match(&line.text) {
            if words <= 4 {
                return None;
            }
            let prefix = self
                .numbering_prefix(&line.text)
                .unwrap_or_default()
                .to_string();
            return Some(Candidate::Numbered { prefix });
        }

        if words > 25 {
            return None;
        }
        if line.char_count() < 2 || noise.matches_pattern(&line.text) {
            return None;
        }

        if words == 1 && (line.bold || line.italic) && line.font_size >= 0.6 * stats.max_size {
            return Some(Candidate::Styled);
        }
        if line.bold {
            return Some(Candidate::Styled);
        }
        if line.font_size >= 0.9 * stats.max_size {
            return Some(Candidate::Styled);
        }

        None
    }
}
