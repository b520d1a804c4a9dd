//! PDF document parser using lopdf.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};
use crate::model::LineRecord;

use super::layout::{self, FontInfo};
use super::options::{ErrorMode, ParseOptions};

/// Fallback page height (US letter) when no MediaBox is resolvable.
const LETTER_HEIGHT: f32 = 792.0;

/// PDF document parser producing per-line records for the outline engine.
pub struct PdfParser {
    doc: LopdfDocument,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        if data.len() < 8 || !data.starts_with(b"%PDF-") {
            return Err(Error::UnknownFormat);
        }

        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        Ok(Self { doc, options })
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Extract line records for the whole document, in page order.
    ///
    /// Page numbers are 1-based. In lenient mode, pages that fail to parse
    /// are skipped with a warning; in strict mode the first failure is
    /// propagated.
    pub fn extract_lines(&self) -> Result<Vec<LineRecord>> {
        let pages = self.doc.get_pages();
        let mut records = Vec::new();

        for (&page_num, &page_id) in pages.iter() {
            match self.extract_page_lines(page_num, page_id) {
                Ok(mut lines) => records.append(&mut lines),
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("skipping page {page_num}: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        log::debug!("extracted {} lines from {} pages", records.len(), pages.len());
        Ok(records)
    }

    /// Extract line records from a single page (1-based).
    pub fn extract_page(&self, page_num: u32) -> Result<Vec<LineRecord>> {
        let pages = self.doc.get_pages();
        let page_id = pages
            .get(&page_num)
            .copied()
            .ok_or(Error::PageOutOfRange(page_num, pages.len() as u32))?;
        self.extract_page_lines(page_num, page_id)
    }

    fn extract_page_lines(&self, page_num: u32, page_id: ObjectId) -> Result<Vec<LineRecord>> {
        let lopdf_fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut fonts = HashMap::new();
        for (name, font) in &lopdf_fonts {
            let base_font = font
                .get(b"BaseFont")
                .ok()
                .and_then(|o| o.as_name().ok())
                .map(|n| String::from_utf8_lossy(n).to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            fonts.insert(name.clone(), FontInfo { name: base_font });
        }

        let content = self.get_page_content(page_id)?;
        let spans = layout::parse_content_stream(&self.doc, &content, &fonts, &lopdf_fonts)?;
        let height = self.page_height(page_id);

        Ok(layout::group_spans_into_lines(spans, page_num, height))
    }

    /// Get page content stream.
    fn get_page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .decompressed_content()
                        .map_err(|e| Error::PdfParse(e.to_string()));
                }
                Err(Error::PdfParse("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// Resolve the page height from the MediaBox, walking up to parent
    /// nodes when the entry is inherited.
    fn page_height(&self, page_id: ObjectId) -> f32 {
        let mut current = page_id;

        for _ in 0..8 {
            let Ok(dict) = self.doc.get_dictionary(current) else {
                break;
            };

            if let Ok(obj) = dict.get(b"MediaBox") {
                let resolved = match obj {
                    Object::Reference(r) => self.doc.get_object(*r).ok(),
                    other => Some(other),
                };
                if let Some(arr) = resolved.and_then(|o| o.as_array().ok()) {
                    if arr.len() == 4 {
                        if let Some(top) = layout::get_number(&arr[3]) {
                            return top;
                        }
                    }
                }
            }

            match dict.get(b"Parent") {
                Ok(Object::Reference(r)) => current = *r,
                _ => break,
            }
        }

        LETTER_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_empty_data() {
        let data: [u8; 0] = [];
        assert!(matches!(
            PdfParser::from_bytes(&data),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_from_bytes_too_short() {
        assert!(matches!(
            PdfParser::from_bytes(b"%PDF"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_from_bytes_unknown_magic() {
        let data = b"<!DOCTYPE html><html></html>";
        assert!(matches!(
            PdfParser::from_bytes(data),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_from_bytes_truncated_pdf() {
        // Valid magic but no document body
        let result = PdfParser::from_bytes(b"%PDF-1.7\n%corrupt");
        assert!(result.is_err());
    }
}
