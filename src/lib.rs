//! # pdftoc
//!
//! Infer a document title and heading outline from PDF text layout.
//!
//! pdftoc derives structure purely from typographic signals (font size,
//! bold/italic markers, explicit numbering prefixes) for documents that
//! carry no native heading tags. The result is a title plus a flat,
//! ordered list of levelled headings.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdftoc::{outline_file, to_json, JsonFormat};
//!
//! fn main() -> pdftoc::Result<()> {
//!     let outline = outline_file("document.pdf")?;
//!     println!("{}", to_json(&outline, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! The layout extractor walks pages and yields per-line records with
//! per-run font metadata and vertical position. The engine then:
//!
//! 1. normalizes lines and computes document statistics (body size,
//!    max size, size ranks, repetition counts),
//! 2. drops noise (page numbers, dates, URLs, repeated footers),
//! 3. classifies heading candidates under a configurable policy,
//! 4. assigns levels from numbering depth or font-size rank,
//! 5. resolves the title from page one,
//! 6. assembles the final ordered outline.
//!
//! Documents are independent; callers may process many concurrently with
//! one worker per document.

pub mod engine;
pub mod error;
pub mod model;
mod output;
pub mod parser;

// Re-export commonly used types
pub use engine::{build_outline, HeadingPolicy, OutlineOptions};
pub use error::{Error, Result};
pub use model::{DocumentStats, HeadingEntry, HeadingLevel, LineRecord, Outline, TextRun};
pub use output::{to_json, JsonFormat};
pub use parser::{ErrorMode, ParseOptions, PdfParser};

use std::io::Read;
use std::path::Path;

/// Extract an outline from a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use pdftoc::outline_file;
///
/// let outline = outline_file("report.pdf").unwrap();
/// println!("{} headings", outline.heading_count());
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P) -> Result<Outline> {
    outline_file_with_options(path, ParseOptions::default(), &OutlineOptions::default())
}

/// Extract an outline from a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use pdftoc::{outline_file_with_options, OutlineOptions, ParseOptions};
///
/// let outline = outline_file_with_options(
///     "report.pdf",
///     ParseOptions::new().lenient(),
///     &OutlineOptions::new().lenient(),
/// ).unwrap();
/// ```
pub fn outline_file_with_options<P: AsRef<Path>>(
    path: P,
    parse: ParseOptions,
    options: &OutlineOptions,
) -> Result<Outline> {
    let parser = PdfParser::open_with_options(path, parse)?;
    let records = parser.extract_lines()?;
    Ok(build_outline(&records, options))
}

/// Extract an outline from PDF bytes with default options.
pub fn outline_bytes(data: &[u8]) -> Result<Outline> {
    outline_bytes_with_options(data, ParseOptions::default(), &OutlineOptions::default())
}

/// Extract an outline from PDF bytes with custom options.
pub fn outline_bytes_with_options(
    data: &[u8],
    parse: ParseOptions,
    options: &OutlineOptions,
) -> Result<Outline> {
    let parser = PdfParser::from_bytes_with_options(data, parse)?;
    let records = parser.extract_lines()?;
    Ok(build_outline(&records, options))
}

/// Extract an outline from a reader with default options.
pub fn outline_reader<R: Read>(reader: R) -> Result<Outline> {
    let parser = PdfParser::from_reader(reader)?;
    let records = parser.extract_lines()?;
    Ok(build_outline(&records, &OutlineOptions::default()))
}

/// Process many documents in parallel, one worker per document.
///
/// Documents are independent: there is no shared mutable state between
/// workers, and a failure is confined to its own document. Results come
/// back in input order.
///
/// # Example
///
/// ```no_run
/// use pdftoc::{outline_files, OutlineOptions, ParseOptions};
///
/// let paths = ["a.pdf", "b.pdf", "c.pdf"];
/// let results = outline_files(&paths, &ParseOptions::default(), &OutlineOptions::default());
/// for (path, result) in paths.iter().zip(&results) {
///     match result {
///         Ok(outline) => println!("{}: {} headings", path, outline.heading_count()),
///         Err(e) => eprintln!("{}: {}", path, e),
///     }
/// }
/// ```
pub fn outline_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    parse: &ParseOptions,
    options: &OutlineOptions,
) -> Vec<Result<Outline>> {
    use rayon::prelude::*;

    paths
        .par_iter()
        .map(|path| outline_file_with_options(path, parse.clone(), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_bytes_rejects_non_pdf() {
        let result = outline_bytes(b"not a pdf at all");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_outline_bytes_rejects_empty() {
        let result = outline_bytes(&[]);
        assert!(result.is_err());
    }
}
