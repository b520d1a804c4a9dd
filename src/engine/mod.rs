//! The heading-inference engine.
//!
//! Turns raw line records into a title and an ordered heading outline
//! using typographic and textual heuristics: body-size estimation, noise
//! filtering, candidate classification, level assignment, title
//! resolution, and final assembly.
//!
//! The engine is a total function over its input: an empty or
//! heading-free document yields an empty outline, never an error. All
//! statistics are computed from an immutable snapshot of the document's
//! lines before classification runs, and nothing here touches state
//! shared across documents.

mod assemble;
mod classify;
mod level;
mod noise;
mod normalize;
mod options;
mod title;

pub use classify::{Candidate, HeadingClassifier};
pub use noise::NoiseFilter;
pub use options::{HeadingPolicy, OutlineOptions};

use std::collections::HashSet;

use crate::model::{DocumentStats, LineRecord, Outline};

use assemble::PendingHeading;

/// Build an outline from raw line records.
///
/// Lines are consumed in document order. Duplicates (same lowercased
/// text on the same page) are suppressed after the first occurrence;
/// noise is dropped; the first qualifying page-1 line becomes the title;
/// surviving candidates are levelled and assembled into the final
/// ordered list.
pub fn build_outline(records: &[LineRecord], options: &OutlineOptions) -> Outline {
    let lines = normalize::normalize_lines(records);
    let stats = DocumentStats::from_lines(&lines);

    if stats.is_empty() {
        return Outline::new();
    }

    let noise = NoiseFilter::new();
    let classifier = HeadingClassifier::new(options.policy);

    let mut seen: HashSet<(String, u32)> = HashSet::new();
    let mut title: Option<String> = None;
    let mut pending: Vec<PendingHeading> = Vec::new();

    for line in &lines {
        if !seen.insert((line.text.to_lowercase(), line.page)) {
            continue;
        }

        if noise.is_noise(&line.text, stats.frequency(&line.text)) {
            continue;
        }

        if options.policy == HeadingPolicy::Lenient && classifier.is_form_field(line) {
            continue;
        }

        if title.is_none()
            && title::is_title_candidate(options.policy, line, &stats, &classifier, &noise)
        {
            title = Some(line.text.clone());
            continue;
        }

        // Keep the chosen title out of the heading list when it recurs
        if let Some(ref t) = title {
            if line.page == 1 && line.text == *t {
                continue;
            }
        }

        let Some(candidate) = classifier.classify(line, &stats, &noise) else {
            continue;
        };
        let level = level::assign_level(options.policy, &candidate, line, &stats);

        pending.push(PendingHeading {
            level,
            text: line.text.clone(),
            page: line.page,
            y: line.y,
        });
    }

    let mut headings = assemble::assemble(pending);

    // No qualifying title: promote the first heading
    let title = match title {
        Some(t) => t,
        None if headings.is_empty() => String::new(),
        None => {
            let first = headings.remove(0);
            first.text.trim().to_string()
        }
    };

    log::debug!(
        "outline: title={:?}, {} headings",
        title,
        headings.len()
    );

    Outline {
        title,
        outline: headings,
    }
}
