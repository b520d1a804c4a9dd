//! Line normalization.
//!
//! Cleans raw extractor output into `TextLine` values: NFC-normalized
//! text with whitespace runs collapsed to single spaces, and style flags
//! aggregated from the contributing runs' font names.

use unicode_normalization::UnicodeNormalization;

use crate::model::{LineRecord, TextLine};

/// Normalize raw text: NFC, collapse whitespace runs, trim.
pub fn normalize_text(raw: &str) -> String {
    let composed: String = raw.nfc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check a font name for a style marker (case-insensitive).
fn font_has_marker(name: &str, markers: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    markers.iter().any(|m| lowered.contains(m))
}

/// Convert raw line records into normalized lines.
///
/// Records with no runs are skipped, as are lines that normalize to
/// empty. A line is bold/italic if any contributing run's font name
/// carries the marker; the extractor only exposes font family names.
pub fn normalize_lines(records: &[LineRecord]) -> Vec<TextLine> {
    let mut lines = Vec::with_capacity(records.len());

    for record in records {
        if record.runs.is_empty() {
            continue;
        }

        let text = normalize_text(&record.text);
        if text.is_empty() {
            continue;
        }

        let font_size = record
            .runs
            .iter()
            .map(|r| r.font_size)
            .fold(f32::MIN, f32::max);
        let bold = record
            .runs
            .iter()
            .any(|r| font_has_marker(&r.font_name, &["bold"]));
        let italic = record
            .runs
            .iter()
            .any(|r| font_has_marker(&r.font_name, &["italic", "oblique"]));

        lines.push(TextLine {
            text,
            font_size,
            bold,
            italic,
            page: record.page,
            y: record.y,
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    #[test]
    fn test_normalize_text_collapses_whitespace() {
        assert_eq!(normalize_text("  1.\t Introduction \n"), "1. Introduction");
        assert_eq!(normalize_text("   \t\n"), "");
    }

    #[test]
    fn test_normalize_text_nfc() {
        // e + combining acute composes to a single code point
        assert_eq!(normalize_text("Cafe\u{0301}"), "Café");
    }

    #[test]
    fn test_skips_empty_and_runless_lines() {
        let records = vec![
            LineRecord::new("   ", vec![TextRun::new(12.0, "Helvetica")], 1, 10.0),
            LineRecord::new("orphan", vec![], 1, 20.0),
            LineRecord::new("kept", vec![TextRun::new(12.0, "Helvetica")], 1, 30.0),
        ];
        let lines = normalize_lines(&records);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "kept");
    }

    #[test]
    fn test_style_aggregation_from_font_names() {
        let records = vec![LineRecord::new(
            "Mixed",
            vec![
                TextRun::new(12.0, "Times-Roman"),
                TextRun::new(14.0, "Times-BoldOblique"),
            ],
            1,
            10.0,
        )];
        let lines = normalize_lines(&records);
        assert!(lines[0].bold);
        assert!(lines[0].italic);
        assert_eq!(lines[0].font_size, 14.0);
    }

    #[test]
    fn test_italic_marker_variants() {
        let italic = LineRecord::new("a", vec![TextRun::new(10.0, "Courier-Italic")], 1, 0.0);
        let oblique = LineRecord::new("b", vec![TextRun::new(10.0, "Helvetica-Oblique")], 1, 0.0);
        let plain = LineRecord::new("c", vec![TextRun::new(10.0, "Helvetica")], 1, 0.0);
        let lines = normalize_lines(&[italic, oblique, plain]);
        assert!(lines[0].italic);
        assert!(lines[1].italic);
        assert!(!lines[2].italic);
    }
}
