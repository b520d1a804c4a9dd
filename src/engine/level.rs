//! Heading level assignment.

use crate::model::{DocumentStats, HeadingLevel, TextLine};

use super::classify::Candidate;
use super::options::HeadingPolicy;

/// Default level when no size rank falls within tolerance.
const FALLBACK_LEVEL: u8 = 3;

/// Tolerance for matching a line's size against a size rank.
const RANK_TOLERANCE: f32 = 0.5;

/// Map an accepted candidate to a heading depth.
pub fn assign_level(
    policy: HeadingPolicy,
    candidate: &Candidate,
    line: &TextLine,
    stats: &DocumentStats,
) -> HeadingLevel {
    match policy {
        HeadingPolicy::Strict => match candidate {
            Candidate::Numbered { prefix } => numbering_level(prefix),
            Candidate::Styled => size_rank_level(line.font_size, &stats.size_ranks),
        },
        HeadingPolicy::Lenient => match candidate {
            Candidate::Numbered { .. } => HeadingLevel(1),
            Candidate::Styled => HeadingLevel(2),
        },
    }
}

/// Level from explicit numbering depth: dot count plus one, so "2.1" is
/// level 2 and "3.2.1" is level 3.
pub fn numbering_level(prefix: &str) -> HeadingLevel {
    let dots = prefix.matches('.').count();
    HeadingLevel((dots + 1).min(u8::MAX as usize) as u8)
}

/// Level from font-size rank clustering.
///
/// Pure function over the sorted distinct-size list: the first rank (in
/// descending order) within tolerance of the line's size wins, even when
/// two ranks are both within tolerance.
pub fn size_rank_level(size: f32, ranks: &[f32]) -> HeadingLevel {
    for (idx, &rank_size) in ranks.iter().enumerate() {
        if (size - rank_size).abs() < RANK_TOLERANCE {
            return HeadingLevel((idx + 1).min(u8::MAX as usize) as u8);
        }
    }
    HeadingLevel(FALLBACK_LEVEL)
}
