//! Line-level types.

use serde::{Deserialize, Serialize};

/// Metadata for one text run contributing to a line.
///
/// The layout extractor does not provide style booleans; it only exposes
/// the font family name, from which bold/italic markers are inferred
/// downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    /// Font size in points
    pub font_size: f32,
    /// Font family name (e.g., "Helvetica-Bold")
    pub font_name: String,
}

impl TextRun {
    /// Create a new run.
    pub fn new(font_size: f32, font_name: impl Into<String>) -> Self {
        Self {
            font_size,
            font_name: font_name.into(),
        }
    }
}

/// One raw line as delivered by the layout extractor.
///
/// `page` is 1-based. `y` is a top-of-line coordinate that increases down
/// the page, so ascending `(page, y)` is reading order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    /// Concatenated text of the constituent runs
    pub text: String,
    /// Per-run font metadata
    pub runs: Vec<TextRun>,
    /// Page number (1-based)
    pub page: u32,
    /// Top-of-line vertical position
    pub y: f32,
}

impl LineRecord {
    /// Create a new line record.
    pub fn new(text: impl Into<String>, runs: Vec<TextRun>, page: u32, y: f32) -> Self {
        Self {
            text: text.into(),
            runs,
            page,
            y,
        }
    }
}

/// A normalized, visually distinct line of text.
///
/// Invariant: `text` is non-empty; lines that normalize to empty are
/// dropped before this type is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Normalized text (whitespace collapsed, trimmed)
    pub text: String,
    /// Maximum font size among the contributing runs
    pub font_size: f32,
    /// True if any contributing run's font name carries a bold marker
    pub bold: bool,
    /// True if any contributing run's font name carries an italic marker
    pub italic: bool,
    /// Page number (1-based)
    pub page: u32,
    /// Top-of-line vertical position, used only for ordering
    pub y: f32,
}

impl TextLine {
    /// Number of characters in the normalized text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Check whether the line reads as all-uppercase.
    ///
    /// Only alphabetic characters are considered; a line with no letters
    /// is not uppercase.
    pub fn is_uppercase(&self) -> bool {
        let mut has_letter = false;
        for c in self.text.chars().filter(|c| c.is_alphabetic()) {
            has_letter = true;
            if !c.is_uppercase() {
                return false;
            }
        }
        has_letter
    }
}
