//! Title resolution.
//!
//! The title is drawn only from the first page: the first line that
//! clears the policy's size bar and is not itself a heading candidate.
//! Fallback promotion of the first heading happens at pipeline level,
//! after assembly.

use crate::model::{DocumentStats, TextLine};

use super::classify::HeadingClassifier;
use super::noise::NoiseFilter;
use super::options::HeadingPolicy;

/// Check whether a line qualifies as the document title.
///
/// Strict: the line's size must exceed `body_size + 1` and the line must
/// independently fail the heading-candidate test. Lenient: the line must
/// reach 95% of the largest observed size.
pub fn is_title_candidate(
    policy: HeadingPolicy,
    line: &TextLine,
    stats: &DocumentStats,
    classifier: &HeadingClassifier,
    noise: &NoiseFilter,
) -> bool {
    if line.page != 1 {
        return false;
    }

    match policy {
        HeadingPolicy::Strict => {
            line.font_size > stats.body_size + 1.0
                && classifier.classify(line, stats, noise).is_none()
        }
        HeadingPolicy::Lenient => line.font_size >= 0.95 * stats.max_size,
    }
}
