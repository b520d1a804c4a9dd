//! Per-document font and frequency statistics.

use std::collections::HashMap;

use super::TextLine;

/// Font sizes are bucketed at 0.1pt precision for histogram purposes.
fn size_key(size: f32) -> i32 {
    (size * 10.0) as i32
}

/// Statistics derived once per document from the full set of normalized
/// lines, before deduplication and before classification begins.
///
/// Immutable after construction; every pipeline stage consults the same
/// snapshot by reference, so there is no mutation between stages.
#[derive(Debug, Clone, Default)]
pub struct DocumentStats {
    /// The most frequent font size (mode); ordinary paragraph text.
    /// Ties are broken by the smallest size value.
    pub body_size: f32,
    /// The largest font size observed
    pub max_size: f32,
    /// Distinct font sizes sorted descending, for level-by-size clustering
    pub size_ranks: Vec<f32>,
    /// Raw occurrence count per lowercased line text, counted before dedup
    frequency: HashMap<String, usize>,
}

impl DocumentStats {
    /// Compute statistics from the normalized line sequence.
    pub fn from_lines(lines: &[TextLine]) -> Self {
        if lines.is_empty() {
            return Self::default();
        }

        let mut histogram: HashMap<i32, usize> = HashMap::new();
        let mut frequency: HashMap<String, usize> = HashMap::new();
        let mut max_size = f32::MIN;

        for line in lines {
            *histogram.entry(size_key(line.font_size)).or_insert(0) += 1;
            *frequency.entry(line.text.to_lowercase()).or_insert(0) += 1;
            if line.font_size > max_size {
                max_size = line.font_size;
            }
        }

        let mut body_key = i32::MAX;
        let mut body_count = 0;
        for (&key, &count) in &histogram {
            if count > body_count || (count == body_count && key < body_key) {
                body_key = key;
                body_count = count;
            }
        }

        let mut rank_keys: Vec<i32> = histogram.keys().copied().collect();
        rank_keys.sort_unstable_by(|a, b| b.cmp(a));
        let size_ranks = rank_keys.into_iter().map(|k| k as f32 / 10.0).collect();

        log::debug!(
            "document stats: {} lines, body={:.1}pt, max={:.1}pt",
            lines.len(),
            body_key as f32 / 10.0,
            max_size
        );

        Self {
            body_size: body_key as f32 / 10.0,
            max_size,
            size_ranks,
            frequency,
        }
    }

    /// Raw occurrence count of a line text across the whole document.
    pub fn frequency(&self, text: &str) -> usize {
        self.frequency
            .get(&text.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// True when the document had no extractable lines.
    pub fn is_empty(&self) -> bool {
        self.size_ranks.is_empty()
    }
}
