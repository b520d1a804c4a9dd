//! Content-stream interpretation and span-to-line grouping.
//!
//! Produces positioned text spans from a page's content stream, then
//! groups spans sharing a baseline into line records. Reading order is
//! approximated by vertical position only; multi-column layouts are not
//! reconstructed.

use std::collections::{BTreeMap, HashMap};

use lopdf::{Document as LopdfDocument, Object};

use crate::error::{Error, Result};
use crate::model::{LineRecord, TextRun};

/// A text span with position and font information.
#[derive(Debug, Clone)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline, PDF bottom-up coordinates)
    pub y: f32,
    /// Font size in points
    pub font_size: f32,
    /// Font name (e.g., "Helvetica-Bold")
    pub font_name: String,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(text: String, x: f32, y: f32, font_size: f32, font_name: String) -> Self {
        Self {
            text,
            x,
            y,
            font_size,
            font_name,
        }
    }
}

/// Font information resolved from page resources.
#[derive(Debug, Clone)]
pub struct FontInfo {
    pub name: String,
}

/// Interpret a page content stream and return positioned text spans.
///
/// Tracks the text matrix (translation and scale), the current font and
/// size, and decodes strings with the font's encoding where available.
pub fn parse_content_stream(
    doc: &LopdfDocument,
    content: &[u8],
    fonts: &HashMap<Vec<u8>, FontInfo>,
    lopdf_fonts: &BTreeMap<Vec<u8>, &lopdf::Dictionary>,
) -> Result<Vec<TextSpan>> {
    let content =
        lopdf::content::Content::decode(content).map_err(|e| Error::PdfParse(e.to_string()))?;

    let mut spans = Vec::new();
    let mut current_font = String::new();
    let mut current_font_name: Vec<u8> = Vec::new();
    let mut current_font_size: f32 = 12.0;
    let mut text_matrix = TextMatrix::default();
    let mut in_text_block = false;

    for op in content.operations {
        match op.operator.as_str() {
            "BT" => {
                in_text_block = true;
                text_matrix = TextMatrix::default();
            }
            "ET" => {
                in_text_block = false;
            }
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Object::Name(font_name) = &op.operands[0] {
                        current_font_name = font_name.clone();
                        if let Some(info) = fonts.get(font_name.as_slice()) {
                            current_font = info.name.clone();
                        } else {
                            current_font =
                                String::from_utf8_lossy(font_name.as_slice()).to_string();
                        }
                    }
                    current_font_size = get_number(&op.operands[1]).unwrap_or(12.0);
                }
            }
            "Td" | "TD" => {
                if op.operands.len() >= 2 {
                    let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                    let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                    text_matrix.translate(tx, ty);
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    text_matrix.set(
                        get_number(&op.operands[0]).unwrap_or(1.0),
                        get_number(&op.operands[1]).unwrap_or(0.0),
                        get_number(&op.operands[2]).unwrap_or(0.0),
                        get_number(&op.operands[3]).unwrap_or(1.0),
                        get_number(&op.operands[4]).unwrap_or(0.0),
                        get_number(&op.operands[5]).unwrap_or(0.0),
                    );
                }
            }
            "T*" => {
                text_matrix.next_line();
            }
            "Tj" | "TJ" => {
                if in_text_block {
                    let encoding = lopdf_fonts
                        .get(&current_font_name)
                        .and_then(|f| f.get_font_encoding(doc).ok());

                    let text = if op.operator == "TJ" {
                        // TJ: array of strings and kerning adjustments.
                        // Large negative adjustments act as word spaces.
                        if let Some(Object::Array(arr)) = op.operands.first() {
                            let mut combined = String::new();
                            let space_threshold = 200.0;

                            for item in arr {
                                match item {
                                    Object::String(bytes, _) => {
                                        if let Some(ref enc) = encoding {
                                            if let Ok(decoded) =
                                                LopdfDocument::decode_text(enc, bytes)
                                            {
                                                combined.push_str(&decoded);
                                            }
                                        } else {
                                            combined.push_str(&decode_text_simple(bytes));
                                        }
                                    }
                                    Object::Integer(n) => {
                                        let adjustment = -(*n as f32);
                                        if adjustment > space_threshold
                                            && !combined.is_empty()
                                            && !combined.ends_with(' ')
                                        {
                                            combined.push(' ');
                                        }
                                    }
                                    Object::Real(n) => {
                                        let adjustment = -n;
                                        if adjustment > space_threshold
                                            && !combined.is_empty()
                                            && !combined.ends_with(' ')
                                        {
                                            combined.push(' ');
                                        }
                                    }
                                    _ => {}
                                }
                            }
                            combined
                        } else {
                            String::new()
                        }
                    } else {
                        // Tj: single string
                        if let Some(Object::String(bytes, _)) = op.operands.first() {
                            if let Some(ref enc) = encoding {
                                LopdfDocument::decode_text(enc, bytes).unwrap_or_default()
                            } else {
                                decode_text_simple(bytes)
                            }
                        } else {
                            String::new()
                        }
                    };

                    if !text.trim().is_empty() {
                        let (x, y) = text_matrix.get_position();
                        let effective_size = current_font_size * text_matrix.get_scale();
                        spans.push(TextSpan::new(
                            text,
                            x,
                            y,
                            effective_size,
                            current_font.clone(),
                        ));
                    }
                }
            }
            "'" | "\"" => {
                text_matrix.next_line();
                if in_text_block {
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                        let encoding = lopdf_fonts
                            .get(&current_font_name)
                            .and_then(|f| f.get_font_encoding(doc).ok());

                        let text = if let Some(ref enc) = encoding {
                            LopdfDocument::decode_text(enc, bytes).unwrap_or_default()
                        } else {
                            decode_text_simple(bytes)
                        };

                        if !text.trim().is_empty() {
                            let (x, y) = text_matrix.get_position();
                            let effective_size = current_font_size * text_matrix.get_scale();
                            spans.push(TextSpan::new(
                                text,
                                x,
                                y,
                                effective_size,
                                current_font.clone(),
                            ));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(spans)
}

/// Group spans into line records by baseline proximity.
///
/// Spans within 30% of their font size on the Y axis belong to the same
/// line. Within a line, spans are ordered by X and their texts joined with
/// single spaces. `page_height` flips PDF's bottom-up Y into a top-down
/// coordinate so that ascending Y is reading order.
pub fn group_spans_into_lines(spans: Vec<TextSpan>, page: u32, page_height: f32) -> Vec<LineRecord> {
    if spans.is_empty() {
        return vec![];
    }

    // Sort spans by Y (descending, since PDF Y is bottom-up) then X
    let mut spans = spans;
    spans.sort_by(|a, b| {
        let y_cmp = b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal);
        if y_cmp == std::cmp::Ordering::Equal {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            y_cmp
        }
    });

    let mut records: Vec<LineRecord> = Vec::new();
    let mut current: Vec<TextSpan> = Vec::new();
    let mut current_y: Option<f32> = None;

    for span in spans {
        let y_tolerance = span.font_size * 0.3;

        match current_y {
            Some(y) if (span.y - y).abs() <= y_tolerance => {
                current.push(span);
            }
            _ => {
                if !current.is_empty() {
                    records.push(line_from_spans(
                        std::mem::take(&mut current),
                        page,
                        page_height,
                    ));
                }
                current_y = Some(span.y);
                current.push(span);
            }
        }
    }

    if !current.is_empty() {
        records.push(line_from_spans(current, page, page_height));
    }

    records
}

fn line_from_spans(mut spans: Vec<TextSpan>, page: u32, page_height: f32) -> LineRecord {
    spans.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    let text = spans
        .iter()
        .map(|s| s.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let y = page_height - spans[0].y;
    let runs = spans
        .into_iter()
        .map(|s| TextRun::new(s.font_size, s.font_name))
        .collect();

    LineRecord::new(text, runs, page, y)
}

/// Text matrix for tracking position in a content stream.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default leading; a TL operator would override this
        self.f -= 12.0 * self.d;
    }

    fn get_position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn get_scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Helper to extract a number from a PDF object.
pub(crate) fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Simple text decoding fallback when no encoding is available.
fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Fallback: Latin-1
    bytes.iter().map(|&b| b as char).collect()
}
