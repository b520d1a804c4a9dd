//! PDF layout extraction.
//!
//! Walks pages and interprets content streams to produce per-line records
//! with font metadata and vertical position, the input contract of the
//! outline engine.

mod layout;
mod options;
mod pdf_parser;

pub use layout::TextSpan;
pub use options::{ErrorMode, ParseOptions};
pub use pdf_parser::PdfParser;
