//! Outline assembly.
//!
//! Orders accepted headings by page and vertical position, strips the
//! transient position field, and applies the trailing-space convention of
//! the output contract.

use crate::model::{HeadingEntry, HeadingLevel};

/// An accepted heading before assembly, still carrying its vertical
/// position for ordering.
#[derive(Debug, Clone)]
pub struct PendingHeading {
    pub level: HeadingLevel,
    pub text: String,
    pub page: u32,
    pub y: f32,
}

/// Sort pending headings by `(page, y)` ascending (stable, so ties keep
/// encounter order), strip the position, and pad text with a trailing
/// space where it does not already end in whitespace.
///
/// The trailing space is an output-compatibility artifact preserved
/// deliberately; do not strip it.
pub fn assemble(mut pending: Vec<PendingHeading>) -> Vec<HeadingEntry> {
    pending.sort_by(|a, b| {
        a.page.cmp(&b.page).then(
            a.y.partial_cmp(&b.y)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    pending
        .into_iter()
        .map(|p| {
            let text = if p.text.ends_with(char::is_whitespace) {
                p.text
            } else {
                format!("{} ", p.text)
            };
            HeadingEntry {
                level: p.level,
                text,
                page: p.page,
            }
        })
        .collect()
}
